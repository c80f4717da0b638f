//! Command-line arguments for the quote server.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Upper limit in seconds of the random delay added to each response.
    /// Zero or a negative value disables the random component.
    #[clap(long, short = 'r', default_value_t = 3)]
    pub delay_range: i64,

    /// Constant delay in seconds applied to all responses.
    #[clap(long, short = 'o', default_value_t = 0)]
    pub delay_offset: u64,

    /// Constant price for all stocks. No fixed price when omitted.
    #[clap(long, short = 'p', default_value_t = 0.0)]
    pub fixed_price: f64,
}
