//! Domain models for the quote server.
//!
//! This module groups the two transient types that live and die within one
//! connection handler invocation:
//! - `request` — sentinel framing and `QuoteRequest` parsing.
//! - `quote` — `QuoteResponse` generation and CSV encoding.

pub mod quote;
pub mod request;
