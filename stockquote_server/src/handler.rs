//! Per-connection request handling.
//!
//! Each accepted connection is served by exactly one invocation of
//! [`handle_connection`] on its own thread: read once, parse, generate,
//! optionally sleep, write once, close. Every failure is contained to that
//! connection; nothing propagates to the accept loop or to other handlers.
//! A malformed or unreadable request gets a silent close with zero response
//! bytes — the client must treat silence-then-close as rejection.

use crate::config::QuoteConfig;
use crate::model::quote::QuoteResponse;
use crate::model::request::QuoteRequest;
use log::{error, info};
use rand::Rng;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::thread;
use std::time::Duration;

/// Size of the single-read request buffer.
pub const READ_BUFFER_SIZE: usize = 1024;

/// Serves one request/response exchange on `stream`, then closes it.
pub fn handle_connection(mut stream: TcpStream, config: &QuoteConfig) {
    let mut buf = [0u8; READ_BUFFER_SIZE];
    if let Err(e) = stream.read(&mut buf) {
        error!("Error reading: {}", e);
        return;
    }

    let req = match QuoteRequest::parse(&buf) {
        Ok(req) => req,
        Err(e) => {
            // bail on the connection if it has a malformed request
            error!("Error parsing request: {}", e);
            return;
        }
    };

    let resp = QuoteResponse::generate(&req, config);

    let delay = response_delay(config);
    info!("Waiting {} seconds", delay.as_secs());
    thread::sleep(delay);

    if let Err(e) = stream.write_all(resp.to_csv_string().as_bytes()) {
        error!("Error writing response: {}", e);
        return;
    }
    if let Ok(peer) = stream.peer_addr() {
        info!("Response sent to {}", peer);
    }
    // Dropping the stream closes the connection.
}

/// Computes the pacing delay for one response.
///
/// The delay is `delay_offset` plus a uniform draw from `[0, delay_range]`
/// inclusive; a non-positive `delay_range` contributes no random component.
pub fn response_delay(config: &QuoteConfig) -> Duration {
    let random_delay = if config.delay_range <= 0 {
        0
    } else {
        // Interpret --delay-range=3 as "up to and including 3 seconds"
        rand::rng().random_range(0..=config.delay_range) as u64
    };
    Duration::from_secs(config.delay_offset + random_delay)
}
