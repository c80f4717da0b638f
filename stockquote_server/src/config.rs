//! Read-only runtime configuration shared by all connection handlers.
//!
//! A `QuoteConfig` is built once from the parsed CLI arguments at startup and
//! then shared behind an `Arc`; nothing mutates it afterwards.
use crate::args::Args;

/// Quote generation and pacing settings.
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    /// Inclusive upper bound in seconds of the random response delay.
    /// Zero or negative means no random delay.
    pub delay_range: i64,
    /// Constant delay in seconds added to every response.
    pub delay_offset: u64,
    /// Forced quote price. Only applies when greater than zero.
    pub fixed_price: f64,
}

impl From<&Args> for QuoteConfig {
    fn from(args: &Args) -> Self {
        Self {
            delay_range: args.delay_range,
            delay_offset: args.delay_offset,
            fixed_price: args.fixed_price,
        }
    }
}
