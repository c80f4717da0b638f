//! Stock quote TCP server.
//!
//! This binary listens on a TCP socket and answers exactly one quote request per
//! connection. Internally, it wires together three main building blocks:
//!
//! - The accept loop in `main` — binds to the well-known address and hands every
//!   accepted connection to a dedicated handler thread.
//! - `handler::handle_connection` — the full per-connection cycle: read a
//!   null-terminated `<stock>,<userID>` payload, parse it, generate a synthetic
//!   quote, optionally sleep a configured delay, write the quote back as CSV,
//!   and close the connection.
//! - `model` — request framing/parsing (`QuoteRequest`) and response
//!   generation/encoding (`QuoteResponse`).
//!
//! Concurrency and errors:
//! - One thread per connection; threads share only the read-only `QuoteConfig`
//!   behind an `Arc`. Handler sleeps block that connection only.
//! - Any read or parse error is logged and the connection is closed without a
//!   response; the accept loop keeps running.
//! - Failing to bind exits the process with code 1, a failed accept with code 2.
//!
//! Network protocol (high-level):
//! - Bind address: `localhost:4443` (see `stockquote_common::net`).
//! - Client sends `<stock>,<userID>` followed by a line terminator and a null
//!   byte; the server replies with a single CSV line
//!   `<price>,<TICKER>,<userID>,<unixTimestamp>,<base64token>`.
#![warn(missing_docs)]
use crate::args::Args;
use crate::config::QuoteConfig;
use crate::handler::handle_connection;
use clap::Parser;
use log::{error, info};
use std::net::TcpListener;
use std::process;
use std::sync::Arc;
use std::thread;

use stockquote_common::net::{HOST, PORT, addr};

mod args;
mod config;
mod handler;
pub mod model;

/// Exit code when the listener socket cannot be bound.
const EXIT_LISTEN: i32 = 1;
/// Exit code when accepting a connection fails.
const EXIT_ACCEPT: i32 = 2;

fn main() {
    init_logger();
    let args = Args::parse();
    let config = Arc::new(QuoteConfig::from(&args));

    let listener = match TcpListener::bind(addr(HOST, PORT)) {
        Ok(listener) => listener,
        Err(e) => {
            error!("Error listening: {}", e);
            process::exit(EXIT_LISTEN);
        }
    };

    if let Ok(local) = listener.local_addr() {
        info!("Listening on {}", local);
    }

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                error!("Error accepting: {}", e);
                process::exit(EXIT_ACCEPT);
            }
        };

        if let (Ok(peer), Ok(local)) = (stream.peer_addr(), stream.local_addr()) {
            info!("Received message {} -> {}", peer, local);
        }

        let config = Arc::clone(&config);
        thread::spawn(move || handle_connection(stream, &config));
    }
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
