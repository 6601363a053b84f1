use tracing::{error, info, warn};

/// Logs rejected requests with consistent format
pub fn log_request_rejected(method: &str, path: &str, reason: &str) {
    warn!("BAD_REQUEST: {} {} - {}", method, path, reason);
}

/// Logs recovered handler panics with consistent format
pub fn log_unexpected_failure(detail: &str) {
    error!("INTERNAL_ERROR: recovered handler panic - {}", detail);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
