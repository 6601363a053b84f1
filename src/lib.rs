//! # Timezone Time Service
//!
//! An HTTP service that reports the current time in arbitrary IANA
//! timezones, parses dates in a fixed ordered set of textual formats, and
//! computes signed differences between timezone-qualified timestamps.
//!
//! ## Features
//! - Current time and date in any IANA timezone
//! - Ordered-precedence parsing of ambiguous date formats
//! - Signed human-readable durations between two zoned timestamps
//! - JSON API under `/api/v1` plus simple HTML pages

/// HTTP routing and request/response marshaling
pub mod api;
/// Configuration management and environment variables
pub mod config;
/// Error types shared by the core and the HTTP layer
pub mod error;
/// Core services: timezone resolution and time query orchestration
pub mod services;
/// Utility functions for datetime parsing, formatting, and logging
pub mod utils;
