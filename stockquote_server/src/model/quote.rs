//! Quote response generation and CSV encoding.
//!
//! A `QuoteResponse` is the payload written back to the client: a synthetic
//! price, the truncated uppercase ticker, the caller's user id, a Unix-seconds
//! timestamp, and an opaque base64 token derived from the request.

use crate::config::QuoteConfig;
use crate::model::request::QuoteRequest;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use chrono::Utc;
use rand::Rng;

/// Number of characters kept from the requested stock symbol.
const TICKER_LEN: usize = 3;
/// Exclusive upper bound for randomly generated prices.
const MAX_RANDOM_PRICE: f64 = 1000.0;

/// Quote payload for a single request.
#[derive(Debug, Clone)]
pub struct QuoteResponse {
    /// Quoted price.
    pub quote: f64,
    /// Uppercased stock symbol, truncated to at most three characters.
    pub stock: String,
    /// User identifier copied verbatim from the request.
    pub user_id: String,
    /// Unix timestamp in seconds, captured at generation time.
    pub timestamp: i64,
    /// Opaque base64 token derived from the request and timestamp.
    ///
    /// Not a key in any cryptographic sense: the timestamp input changes only
    /// once per second, so identical requests within the same second yield
    /// identical tokens.
    pub cryptokey: String,
}

impl QuoteResponse {
    /// Generates a response for `req` using the process-wide `config`.
    ///
    /// The price is `config.fixed_price` when that is positive, otherwise a
    /// uniform draw from `[0, 1000)`. The timestamp is captured once and
    /// reused for the token derivation.
    pub fn generate(req: &QuoteRequest, config: &QuoteConfig) -> Self {
        let quote = if config.fixed_price > 0.0 {
            config.fixed_price
        } else {
            // default, invalid case: caller wants a random price
            rand::rng().random_range(0.0..MAX_RANDOM_PRICE)
        };

        // Only use the first 3 chars of a stock
        let truncated: String = req.stock.chars().take(TICKER_LEN).collect();

        let now_unix = Utc::now().timestamp();

        Self {
            quote,
            stock: truncated.to_uppercase(),
            user_id: req.user_id.clone(),
            timestamp: now_unix,
            cryptokey: Self::derive_cryptokey(&req.stock, &req.user_id, now_unix),
        }
    }

    /// Derives the opaque token: standard base64 of the byte concatenation
    /// `stock + user_id + timestamp digits`, using the untruncated stock and
    /// no separators or salt.
    fn derive_cryptokey(stock: &str, user_id: &str, timestamp: i64) -> String {
        let seed = format!("{}{}{}", stock, user_id, timestamp);
        BASE64_STANDARD.encode(seed.as_bytes())
    }

    /// Encodes the response as one CSV line with no trailing delimiter.
    ///
    /// Field order is fixed: price with exactly two decimals, stock, user id,
    /// timestamp as a plain integer, token.
    pub fn to_csv_string(&self) -> String {
        format!(
            "{:.2},{},{},{},{}",
            self.quote, self.stock, self.user_id, self.timestamp, self.cryptokey
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(stock: &str, user_id: &str) -> QuoteRequest {
        QuoteRequest {
            stock: stock.to_string(),
            user_id: user_id.to_string(),
        }
    }

    fn config(fixed_price: f64) -> QuoteConfig {
        QuoteConfig {
            delay_range: 0,
            delay_offset: 0,
            fixed_price,
        }
    }

    #[test]
    fn fixed_price_overrides_random() {
        for _ in 0..10 {
            let resp = QuoteResponse::generate(&request("AAPL", "alice"), &config(314.15));
            assert_eq!(resp.quote, 314.15);
        }
    }

    #[test]
    fn random_price_stays_in_range() {
        for _ in 0..100 {
            let resp = QuoteResponse::generate(&request("AAPL", "alice"), &config(0.0));
            assert!(resp.quote >= 0.0 && resp.quote < 1000.0);
        }
    }

    #[test]
    fn truncates_and_uppercases_stock() {
        let resp = QuoteResponse::generate(&request("abcde", "u"), &config(1.0));
        assert_eq!(resp.stock, "ABC");
    }

    #[test]
    fn short_stock_is_kept_whole() {
        let resp = QuoteResponse::generate(&request("ab", "u"), &config(1.0));
        assert_eq!(resp.stock, "AB");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let resp = QuoteResponse::generate(&request("éàçx", "u"), &config(1.0));
        assert_eq!(resp.stock, "ÉÀÇ");
    }

    #[test]
    fn user_id_is_copied_verbatim() {
        let resp = QuoteResponse::generate(&request("AAPL", " Bob 42 "), &config(1.0));
        assert_eq!(resp.user_id, " Bob 42 ");
    }

    #[test]
    fn cryptokey_encodes_untruncated_stock_user_and_timestamp() {
        let resp = QuoteResponse::generate(&request("ABCDE", "user42"), &config(1.0));
        let decoded = BASE64_STANDARD.decode(&resp.cryptokey).unwrap();
        let expected = format!("ABCDEuser42{}", resp.timestamp);
        assert_eq!(decoded, expected.as_bytes());
    }

    #[test]
    fn csv_has_five_fields_in_order() {
        let resp = QuoteResponse::generate(&request("ABCDE", "user42"), &config(250.0));
        let csv = resp.to_csv_string();
        let fields: Vec<&str> = csv.split(',').collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0], "250.00");
        assert_eq!(fields[1], "ABC");
        assert_eq!(fields[2], "user42");
        assert_eq!(fields[3], resp.timestamp.to_string());
        assert_eq!(fields[4], resp.cryptokey);
    }

    #[test]
    fn csv_price_always_has_two_decimals() {
        let resp = QuoteResponse::generate(&request("V", "u"), &config(7.0));
        assert!(resp.to_csv_string().starts_with("7.00,"));
    }
}
