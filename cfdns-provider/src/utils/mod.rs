//! Utility modules.

/// Serde helpers for RFC 3339 timestamps.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
