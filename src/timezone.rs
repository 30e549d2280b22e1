//! Local dates from canonical timezone names.

use time::{Date, OffsetDateTime};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Get today's date in the given timezone.
///
/// `canonical_timezone` should be a valid, canonical timezone name, e.g.
/// "Pacific/Auckland".
///
/// # Errors
/// Returns an [Error::InvalidTimezone] if the name is not a known timezone.
pub fn local_date_today(canonical_timezone: &str) -> Result<Date, Error> {
    let timezone = time_tz::timezones::get_by_name(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))?;

    let now = OffsetDateTime::now_utc();
    let offset = timezone.get_offset_utc(&now).to_utc();

    Ok(now.to_offset(offset).date())
}
