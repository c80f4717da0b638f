//! Error types for the quote service.
//!
//! The `QuoteError` enum unifies I/O failures with the request-parsing
//! failure cases, allowing the server to propagate a single error type.
use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Unified error type for the quote service.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The read buffer carries no sentinel byte, or no body before it.
    #[error("missing request body")]
    MissingBody,

    /// The request body did not split into exactly two comma-separated fields.
    #[error("wrong number of arguments: expected 2, found {found}")]
    MalformedArguments {
        /// Number of fields the split actually produced.
        found: usize,
    },

    /// UTF-8 conversion error when decoding the request body.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] Utf8Error),
}
