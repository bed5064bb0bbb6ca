//! Barcode scan flow
//!
//! A scan event triggers an existence check against the backend and ends
//! in either the existing product or a prompt to create one with the
//! barcode prefilled. A latch
//! ignores scan events while a check is in flight or a previous scan is
//! still being handled, so rapid repeated scans of the same frame trigger
//! exactly one lookup.

use std::time::Duration;

use shared::models::Product;

use crate::api::ApiClient;
use crate::error::AppResult;

/// How long after a successful navigation the latch stays set before the
/// scanner accepts new events again.
pub const RESET_DELAY: Duration = Duration::from_millis(500);

/// Result of handling one scan event.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Dropped by the de-duplication guard; no lookup was performed.
    Ignored,
    /// The barcode matches an existing product; navigate to its detail.
    Found(Product),
    /// No match; offer to create a product with this barcode prefilled,
    /// or reset and rescan.
    NotFound { barcode: String },
}

/// De-duplication latch for the scan screen. Pure state; the service
/// drives it around the backend lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScannerFlow {
    scanned: bool,
    checking: bool,
}

impl ScannerFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a new scan event would be accepted.
    pub fn can_scan(&self) -> bool {
        !self.scanned && !self.checking
    }

    /// Accept a scan event. Returns false when one is already being
    /// handled or a check is in flight; the event must be ignored.
    pub fn begin_check(&mut self) -> bool {
        if self.scanned || self.checking {
            return false;
        }
        self.scanned = true;
        self.checking = true;
        true
    }

    /// Mark the in-flight check finished. The scanned latch stays set
    /// until `reset` so the outcome can be handled without re-entry.
    pub fn finish_check(&mut self) {
        self.checking = false;
    }

    /// Back to idle; scanning is accepted again.
    pub fn reset(&mut self) {
        self.scanned = false;
        self.checking = false;
    }
}

/// Scanner service
#[derive(Clone)]
pub struct ScannerService {
    api: ApiClient,
    flow: ScannerFlow,
}

impl ScannerService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            flow: ScannerFlow::new(),
        }
    }

    /// Handle one scan event. On a lookup error the flow resets to idle so
    /// the user can retry; no automatic retry is performed.
    pub async fn handle_scan(&mut self, barcode: &str) -> AppResult<ScanOutcome> {
        if !self.flow.begin_check() {
            tracing::debug!(barcode, "Scan ignored: check already in flight");
            return Ok(ScanOutcome::Ignored);
        }

        let result = self.api.find_by_barcode(barcode).await;
        self.flow.finish_check();

        match result {
            Ok(Some(product)) => Ok(ScanOutcome::Found(product)),
            Ok(None) => Ok(ScanOutcome::NotFound {
                barcode: barcode.to_string(),
            }),
            Err(e) => {
                tracing::error!("Barcode lookup failed: {}", e);
                self.flow.reset();
                Err(e)
            }
        }
    }

    /// Release the latch after the fixed post-navigation delay, allowing a
    /// re-scan when the user returns to the scanner.
    pub async fn reset_after_delay(&mut self) {
        tokio::time::sleep(RESET_DELAY).await;
        self.flow.reset();
    }

    /// Release the latch immediately (user chose "scan again").
    pub fn reset(&mut self) {
        self.flow.reset();
    }

    pub fn flow(&self) -> &ScannerFlow {
        &self.flow
    }
}
