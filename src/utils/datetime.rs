use chrono::{DateTime, Duration, NaiveDateTime};
use chrono_tz::Tz;

/// Accepted input formats, tried in order; the first full-string match wins.
///
/// Order matters: the dot-separated day-first and month-first formats are
/// structurally ambiguous whenever both day and month are <= 12, so the
/// day-first format takes precedence.
const DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S", // 2024-12-29 15:30:00
    "%d.%m.%Y %H:%M:%S", // 29.12.2024 15:30:00
    "%I:%M%p %Y-%m-%d",  // 03:30PM 2024-12-29
    "%m.%d.%Y %H:%M:%S", // 12.29.2024 15:30:00
];

/// Parses a free-form date string against the accepted formats.
///
/// Each format must consume the entire input with valid calendar and clock
/// ranges. Returns `None` when no format matches; never panics.
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

/// Renders a zoned timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_time(dt: &DateTime<Tz>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Renders only the calendar date portion, `YYYY-MM-DD`.
pub fn format_date(dt: &DateTime<Tz>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Renders a zoned timestamp with its zone abbreviation, for the HTML pages.
pub fn format_time_verbose(dt: &DateTime<Tz>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

/// Renders a signed duration as `[-]D day(s), H:MM:SS[.ffffff]`.
///
/// The day part is omitted when zero and the fractional part when the
/// duration is a whole number of seconds. Negative durations carry a single
/// leading minus over the whole rendering.
pub fn format_duration(duration: Duration) -> String {
    let negative = duration < Duration::zero();
    let duration = if negative { -duration } else { duration };

    let days = duration.num_days();
    let mut seconds = duration.num_seconds() - days * 86_400;
    let hours = seconds / 3_600;
    seconds %= 3_600;
    let minutes = seconds / 60;
    seconds %= 60;
    let micros = duration.num_microseconds().map_or(0, |us| us % 1_000_000);

    let sign = if negative { "-" } else { "" };
    let day_part = match days {
        0 => String::new(),
        1 => "1 day, ".to_string(),
        n => format!("{} days, ", n),
    };
    let frac_part = if micros > 0 {
        format!(".{:06}", micros)
    } else {
        String::new()
    };

    format!(
        "{}{}{}:{:02}:{:02}{}",
        sign, day_part, hours, minutes, seconds, frac_part
    )
}
