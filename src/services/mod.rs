/// Time query orchestration and date difference computation
pub mod time;
/// Timezone identifier resolution against the IANA database
pub mod timezone;
