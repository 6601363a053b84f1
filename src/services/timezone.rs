use chrono_tz::Tz;

/// Resolves an IANA timezone identifier against the bundled database.
///
/// Lookup is case-sensitive and must match an entry exactly. Unknown
/// identifiers yield `None` rather than an error so callers can map the
/// outcome to a user-facing response; this never panics.
pub fn resolve(name: &str) -> Option<Tz> {
    name.parse::<Tz>().ok()
}
