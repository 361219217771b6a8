//! Timestamp offsets and time zone helpers.
//!
//! Offsets are whole minutes east of UTC, as `i32`. Named zones come from the
//! IANA database bundled by `chrono-tz`.

use std::fmt;

use chrono::{DateTime, FixedOffset, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Returns `t` moved by `offset_minutes` (negative moves it earlier).
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use utilkit::offset_time;
///
/// let t = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
/// let later = offset_time(&t, 90).unwrap();
/// assert_eq!(later, Utc.with_ymd_and_hms(2024, 1, 15, 11, 30, 0).unwrap());
/// ```
///
/// # Errors
///
/// Returns [`TimeError::OutOfRange`] if the result is not representable.
pub fn offset_time<Z: TimeZone>(
    t: &DateTime<Z>,
    offset_minutes: i32,
) -> Result<DateTime<Z>, TimeError> {
    t.clone()
        .checked_add_signed(TimeDelta::minutes(i64::from(offset_minutes)))
        .ok_or(TimeError::OutOfRange)
}

/// A fixed UTC offset with a display name such as `UTC+05:30`.
///
/// Fixed zones never observe daylight saving time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedZone {
    name: String,
    offset: FixedOffset,
}

impl FixedZone {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Offset from UTC in minutes
    pub fn offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// Expresses the instant `t` in this zone's wall clock.
    pub fn localize<Z: TimeZone>(&self, t: &DateTime<Z>) -> DateTime<FixedOffset> {
        t.with_timezone(&self.offset)
    }
}

impl fmt::Display for FixedZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<FixedZone> for FixedOffset {
    fn from(zone: FixedZone) -> Self {
        zone.offset
    }
}

/// Builds a [`FixedZone`] for `offset_minutes`, named `UTC±HH:MM`.
///
/// # Examples
///
/// ```
/// use utilkit::offset_to_zone;
///
/// let zone = offset_to_zone(-150).unwrap();
/// assert_eq!(zone.name(), "UTC-02:30");
/// assert_eq!(zone.offset().local_minus_utc(), -9000);
/// ```
///
/// # Errors
///
/// Returns [`TimeError::OffsetOutOfRange`] unless the offset is strictly
/// less than a day (1440 minutes) in either direction. `chrono::FixedOffset`
/// cannot represent larger offsets, so unlike a plain "seconds east of UTC"
/// zone this rejects them instead of accepting any value.
pub fn offset_to_zone(offset_minutes: i32) -> Result<FixedZone, TimeError> {
    let offset = offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(TimeError::OffsetOutOfRange(offset_minutes))?;

    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let magnitude = offset_minutes.unsigned_abs();
    let name = format!("UTC{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60);

    Ok(FixedZone { name, offset })
}

/// Re-labels `t`'s wall clock into `zone` without converting the instant.
///
/// The result shows the same year, month, day, hour, minute and second as
/// `t`, but generally denotes a different moment. A wall clock that occurs
/// twice in `zone` (the hour repeated when daylight saving ends) resolves to
/// the earlier instant. A wall clock skipped by `zone` (the hour lost when
/// daylight saving starts) is read with the offset in force before the
/// transition, so it lands after the gap: 02:30 on a New York spring-forward
/// day becomes 03:30 EDT.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_tz::Asia::Kolkata;
/// use utilkit::align_clock;
///
/// let t = Kolkata.with_ymd_and_hms(2024, 10, 25, 10, 30, 0).unwrap();
/// let aligned = align_clock(&t, &Utc);
/// assert_eq!(aligned.to_string(), "2024-10-25 10:30:00 UTC");
/// ```
pub fn align_clock<Z, Target>(t: &DateTime<Z>, zone: &Target) -> DateTime<Target>
where
    Z: TimeZone,
    Target: TimeZone,
{
    let local = t.naive_local();
    if let Some(aligned) = zone.from_local_datetime(&local).earliest() {
        return aligned;
    }

    // Inside a gap: use the offset from an hour before the skipped wall clock
    let before = local
        .checked_sub_signed(TimeDelta::hours(1))
        .unwrap_or(local);
    let offset = zone.offset_from_utc_datetime(&before).fix();
    let utc = local
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
        .unwrap_or(local);
    zone.from_utc_datetime(&utc)
}

/// Converts between zones, keeping the instant.
///
/// `t`'s wall clock is first read as a time in `from` (see [`align_clock`]),
/// then that instant is expressed in `to`, with daylight saving applied.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::{America::New_York, Asia::Kolkata};
/// use utilkit::convert_timezone;
///
/// let t = Kolkata.with_ymd_and_hms(2024, 10, 25, 10, 30, 0).unwrap();
/// let ny = convert_timezone(&t, &Kolkata, &New_York);
/// assert_eq!(
///     ny.format("%Y-%m-%d %H:%M:%S %:z").to_string(),
///     "2024-10-25 01:00:00 -04:00"
/// );
/// ```
pub fn convert_timezone<Z, Src, Dst>(t: &DateTime<Z>, from: &Src, to: &Dst) -> DateTime<Dst>
where
    Z: TimeZone,
    Src: TimeZone,
    Dst: TimeZone,
{
    align_clock(t, from).with_timezone(to)
}

/// Looks up an IANA zone name such as `"Europe/Berlin"`.
///
/// # Errors
///
/// Returns [`TimeError::UnknownZone`] for names missing from the database.
pub fn parse_zone(name: &str) -> Result<Tz, TimeError> {
    name.parse::<Tz>().map_err(|_| {
        tracing::debug!(zone = name, "Unknown time zone name");
        TimeError::UnknownZone(name.to_string())
    })
}

/// Current UTC offset of the named zone, in minutes.
///
/// For zones that observe daylight saving the answer depends on when this is
/// called; use [`zone_name_to_offset_minutes_at`] for a fixed instant.
///
/// # Examples
///
/// ```
/// use utilkit::zone_name_to_offset_minutes;
///
/// assert_eq!(zone_name_to_offset_minutes("Asia/Kolkata").unwrap(), 330);
/// ```
///
/// # Errors
///
/// Returns [`TimeError::UnknownZone`] for names missing from the database.
pub fn zone_name_to_offset_minutes(name: &str) -> Result<i32, TimeError> {
    zone_name_to_offset_minutes_at(name, Utc::now())
}

/// UTC offset of the named zone at `instant`, in minutes.
///
/// # Errors
///
/// Returns [`TimeError::UnknownZone`] for names missing from the database.
pub fn zone_name_to_offset_minutes_at(
    name: &str,
    instant: DateTime<Utc>,
) -> Result<i32, TimeError> {
    let zone = parse_zone(name)?;
    let offset = instant.with_timezone(&zone).offset().fix();
    Ok(offset.local_minus_utc() / 60)
}
