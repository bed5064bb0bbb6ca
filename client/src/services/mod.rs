//! Client-side services over the remote backend

pub mod auth;
pub mod catalog;
pub mod form;
pub mod product;
pub mod scanner;
pub mod statistics;
