//! Time zone helpers
//!
//! Opening hours are local times; every instant is converted into the
//! restaurant's zone before it reaches the evaluator.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Parse an IANA zone name ("Europe/Madrid"), `None` if unknown
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Zone configured on a restaurant, falling back to the business default
pub fn resolve_timezone(configured: Option<&str>, default_tz: Tz) -> Tz {
    match configured {
        Some(name) => parse_timezone(name).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown time zone '{}', falling back to {}",
                name,
                default_tz.name()
            );
            default_tz
        }),
        None => default_tz,
    }
}

/// Instant expressed in the given zone
pub fn to_local(now: &DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    now.with_timezone(&tz)
}
