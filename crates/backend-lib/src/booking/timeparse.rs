// ============================
// roombooker-backend-lib/src/booking/timeparse.rs
// ============================
//! Timestamp normalization at the booking ingestion boundary.
//!
//! Clients send start/end in whatever their widgets produce: full
//! RFC 3339, `datetime-local` values without a zone, or space-separated
//! variants. Anything matching the allow-list is normalized to UTC;
//! zone-less input is interpreted in the server's local zone. Input
//! matching nothing is kept raw rather than failing the create, which
//! marks the booking as not time-filterable.
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use roombooker_common::BookingTime;
use tracing::warn;

/// Normalize one client-supplied timestamp using the server-local zone
/// for zone-less input.
pub fn normalize_timestamp(raw: &str, formats: &[String]) -> BookingTime {
    normalize_in(raw, formats, &Local)
}

/// Zone-parameterized normalization; `tz` only applies to zone-less
/// layouts, offset-qualified input carries its own zone.
pub fn normalize_in<Tz: TimeZone>(raw: &str, formats: &[String], tz: &Tz) -> BookingTime {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return BookingTime::Utc(t.with_timezone(&Utc));
    }

    for format in formats {
        let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) else {
            continue;
        };
        // earliest() picks the first instant for ambiguous wall-clock
        // times around DST transitions; a nonexistent time falls through
        if let Some(t) = tz.from_local_datetime(&naive).earliest() {
            return BookingTime::Utc(t.with_timezone(&Utc));
        }
    }

    warn!(value = raw, "timestamp matched no accepted format, storing raw");
    BookingTime::Raw(raw.to_string())
}
