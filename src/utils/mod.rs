/// Date parsing, timestamp formatting, and duration rendering
pub mod datetime;
/// Consistent-format logging helpers
pub mod logging;
