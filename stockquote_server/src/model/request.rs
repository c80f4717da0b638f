//! Request framing and parsing.
//!
//! A request arrives as one read into a fixed-size buffer. The meaningful
//! payload ends at the first null byte; the byte immediately before the null
//! is the client's line terminator and is discarded. What remains must be
//! `<stock>,<userID>` with exactly one comma. Fields are taken naïvely: no
//! trimming, no format validation beyond the field count.

use std::str;
use stockquote_common::{QuoteError, Result};

/// Sentinel byte marking the end of the request payload.
pub const SENTINEL: u8 = 0;

/// One parsed quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    /// Requested stock symbol, as supplied by the client.
    pub stock: String,
    /// Identifier of the requesting user.
    pub user_id: String,
}

/// Extracts the textual request body from a read buffer.
///
/// Scans for the first [`SENTINEL`] byte and returns the bytes strictly before
/// the byte preceding it. Fails with [`QuoteError::MissingBody`] when the
/// sentinel is absent, or when it sits too early for any body to exist.
pub fn frame_body(buf: &[u8]) -> Result<&[u8]> {
    let end = buf
        .iter()
        .position(|&b| b == SENTINEL)
        .ok_or(QuoteError::MissingBody)?;
    if end <= 1 {
        // Probably a request with no body
        return Err(QuoteError::MissingBody);
    }
    Ok(&buf[..end - 1])
}

impl QuoteRequest {
    /// Parses a raw read buffer into a request.
    ///
    /// The framed body is decoded as UTF-8 and split on `,`; any count other
    /// than two fields fails with [`QuoteError::MalformedArguments`].
    pub fn parse(buf: &[u8]) -> Result<Self> {
        let body = str::from_utf8(frame_body(buf)?)?;

        let parts: Vec<&str> = body.split(',').collect();
        if parts.len() != 2 {
            return Err(QuoteError::MalformedArguments { found: parts.len() });
        }

        Ok(Self {
            stock: parts[0].to_string(),
            user_id: parts[1].to_string(),
        })
    }
}
