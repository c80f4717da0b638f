//! Shared networking constants and helpers.

/// Host the quote service binds to.
pub const HOST: &str = "localhost";
/// TCP port that answers quote requests.
pub const PORT: u16 = 4443;
/// Transport kind (currently TCP).
pub const PROTOCOL: &str = "tcp";

/// Helper to format a host with a port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}
