//! Submission timestamps in the es-MX locale form

use chrono::{DateTime, FixedOffset, Timelike, Utc};

/// Mexico City has had no daylight saving time since 2022
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -6 * 60;

/// Build the fixed zone for an offset in minutes east of UTC
pub fn utc_offset(minutes: i32) -> crate::Result<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            crate::RoverError::Config(format!("UTC offset of {} minutes is out of range", minutes))
        })
}

/// Format as `d/m/yyyy, h:mm:ss a.m.` in the given zone
pub fn format_timestamp(at: DateTime<Utc>, zone: FixedOffset) -> String {
    let local = at.with_timezone(&zone);
    let meridiem = if local.hour() < 12 { "a.m." } else { "p.m." };
    format!("{} {}", local.format("%-d/%-m/%Y, %-I:%M:%S"), meridiem)
}
