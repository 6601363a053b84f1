use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{Result, TimeError};
use crate::services::timezone;
use crate::utils::datetime::{format_date, format_duration, format_time, parse_date};

/// A timezone-qualified date string, as supplied by the datediff endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DateSpec {
    pub date: String,
    pub tz: Option<String>,
}

/// Orchestrates timezone resolution, date parsing, and difference
/// computation.
///
/// Holds only the immutable server default zone; every operation is a pure
/// pipeline over its inputs and the current wall-clock, so instances are
/// freely shareable across requests.
#[derive(Debug, Clone, Copy)]
pub struct TimeService {
    server_tz: Tz,
}

impl TimeService {
    pub fn new(server_tz: Tz) -> Self {
        Self { server_tz }
    }

    /// Current wall-clock time in the requested zone (server zone when
    /// omitted), rendered as `YYYY-MM-DD HH:MM:SS`.
    pub fn current_time(&self, tz_name: Option<&str>) -> Result<String> {
        let now = self.now_in(tz_name)?;
        Ok(format_time(&now))
    }

    /// Calendar date portion of "now" in the requested zone, `YYYY-MM-DD`.
    pub fn current_date(&self, tz_name: Option<&str>) -> Result<String> {
        let now = self.now_in(tz_name)?;
        Ok(format_date(&now))
    }

    /// "Now" in the requested zone as a full zoned timestamp.
    pub fn now_in(&self, tz_name: Option<&str>) -> Result<DateTime<Tz>> {
        let tz = self.resolve_or_default(tz_name)?;
        Ok(Utc::now().with_timezone(&tz))
    }

    /// Signed elapsed time between two zoned timestamps, end minus start,
    /// rendered as human-readable duration text.
    ///
    /// Both specs must be present, both date strings must parse, and both
    /// zones must resolve; every failure maps to its own error kind. Which
    /// side carried an unparsable date is deliberately not revealed.
    pub fn difference(&self, start: Option<&DateSpec>, end: Option<&DateSpec>) -> Result<String> {
        let start = start.ok_or(TimeError::MissingParameter("start"))?;
        let end = end.ok_or(TimeError::MissingParameter("end"))?;

        let start_naive = parse_date(&start.date).ok_or(TimeError::InvalidDateFormat)?;
        let end_naive = parse_date(&end.date).ok_or(TimeError::InvalidDateFormat)?;

        let start_tz = self.resolve_or_default(start.tz.as_deref())?;
        let end_tz = self.resolve_or_default(end.tz.as_deref())?;

        let start_zoned = localize(start_naive, start_tz)?;
        let end_zoned = localize(end_naive, end_tz)?;

        Ok(format_duration(end_zoned - start_zoned))
    }

    fn resolve_or_default(&self, tz_name: Option<&str>) -> Result<Tz> {
        match tz_name {
            Some(name) => {
                timezone::resolve(name).ok_or_else(|| TimeError::InvalidTimezone(name.to_string()))
            }
            None => Ok(self.server_tz),
        }
    }
}

/// Interprets a naive wall-clock reading in the given zone, yielding an
/// absolute instant.
///
/// Ambiguous readings (the repeated hour of a DST fold) take the earlier
/// instant; readings inside a DST gap do not exist in that zone and are
/// rejected as an invalid date.
fn localize(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(TimeError::InvalidDateFormat),
    }
}
