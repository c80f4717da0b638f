//!
//! Common types shared by the stock quote service.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod result;

pub use error::QuoteError;
pub use result::Result;
