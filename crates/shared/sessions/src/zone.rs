//! Time-zone resolution
//!
//! Names resolve to IANA zones from the tz database, so the offset follows
//! daylight saving on the date in question. Abbreviations map to the zone
//! that uses them (`EST` and `EDT` both mean New York). Explicit offsets
//! (`+08:00`, `UTC-5`) stay fixed all year.

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use desk_ports::{SessionError, SessionResult};

/// Abbreviation → IANA zone
pub const ZONE_ABBREVIATIONS: [(&str, Tz); 26] = [
    // AU / NZ
    ("AEST", Tz::Australia__Sydney),
    ("AEDT", Tz::Australia__Sydney),
    ("ACST", Tz::Australia__Adelaide),
    ("ACDT", Tz::Australia__Adelaide),
    ("AWST", Tz::Australia__Perth),
    ("NZST", Tz::Pacific__Auckland),
    ("NZDT", Tz::Pacific__Auckland),
    // US
    ("EST", Tz::America__New_York),
    ("EDT", Tz::America__New_York),
    ("CST", Tz::America__Chicago),
    ("CDT", Tz::America__Chicago),
    ("MST", Tz::America__Denver),
    ("MDT", Tz::America__Denver),
    ("PST", Tz::America__Los_Angeles),
    ("PDT", Tz::America__Los_Angeles),
    // EU / UK
    ("GMT", Tz::UTC),
    ("BST", Tz::Europe__London),
    ("CET", Tz::Europe__Berlin),
    ("CEST", Tz::Europe__Berlin),
    ("EET", Tz::Europe__Athens),
    ("EEST", Tz::Europe__Athens),
    // Asia (IST is India, not Irish summer time)
    ("HKT", Tz::Asia__Hong_Kong),
    ("SGT", Tz::Asia__Singapore),
    ("JST", Tz::Asia__Tokyo),
    ("KST", Tz::Asia__Seoul),
    ("IST", Tz::Asia__Kolkata),
];

const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// A resolved zone: an IANA zone or a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl Zone {
    pub const UTC: Zone = Zone::Named(Tz::UTC);

    /// IANA name, or `UTC±HH:MM` for a fixed offset
    pub fn name(&self) -> String {
        match self {
            Zone::Named(tz) => tz.name().to_string(),
            Zone::Fixed(offset) => offset_label(*offset),
        }
    }

    /// Offset in effect at `instant`
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Named(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
            Zone::Fixed(offset) => *offset,
        }
    }

    /// `instant` on this zone's wall clock
    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset_at(instant))
    }

    /// Instant of a wall-clock time in this zone
    ///
    /// A repeated time takes its first occurrence. A skipped time keeps the
    /// offset in effect before the transition, so 02:30 on a spring-forward
    /// night lands at 03:30 local.
    pub fn to_utc(&self, local: NaiveDateTime) -> DateTime<Utc> {
        let offset = match self {
            Zone::Named(tz) => match tz.from_local_datetime(&local).earliest() {
                Some(instant) => return instant.with_timezone(&Utc),
                None => tz
                    .offset_from_utc_datetime(&(local - TimeDelta::days(1)))
                    .fix(),
            },
            Zone::Fixed(offset) => *offset,
        };
        (local - TimeDelta::seconds(i64::from(offset.local_minus_utc()))).and_utc()
    }
}

/// Build an offset from minutes east of UTC
pub fn offset_from_minutes(minutes: i32) -> SessionResult<FixedOffset> {
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(SessionError::InvalidOffset(minutes.to_string()));
    }
    FixedOffset::east_opt(minutes * 60).ok_or_else(|| SessionError::InvalidOffset(minutes.to_string()))
}

/// Resolve `UTC`, an abbreviation (`EDT`, `AEST`), an IANA name
/// (`America/New_York`) or an explicit offset (`+08:00`, `-0530`, `UTC+8`)
pub fn resolve_zone(name: &str) -> SessionResult<Zone> {
    let trimmed = name.trim();
    let upper = trimmed.to_ascii_uppercase();

    if upper == "UTC" || upper == "Z" {
        return Ok(Zone::UTC);
    }
    if let Some((_, tz)) = ZONE_ABBREVIATIONS.iter().find(|(abbr, _)| *abbr == upper) {
        return Ok(Zone::Named(*tz));
    }
    if let Ok(tz) = trimmed.parse::<Tz>() {
        return Ok(Zone::Named(tz));
    }

    let rest = upper
        .strip_prefix("UTC")
        .or_else(|| upper.strip_prefix("GMT"))
        .unwrap_or(&upper);
    if rest.starts_with('+') || rest.starts_with('-') {
        return parse_offset(rest).map(Zone::Fixed);
    }

    Err(SessionError::UnknownZone(trimmed.to_string()))
}

/// Parse `+H`, `+HH`, `+HHMM` or `+HH:MM`
pub fn parse_offset(s: &str) -> SessionResult<FixedOffset> {
    let invalid = || SessionError::InvalidOffset(s.to_string());

    let (sign, digits) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None if digits.len() == 4 => digits.split_at(2),
        None => (digits, "0"),
    };

    if hours.is_empty() || hours.len() > 2 || minutes.is_empty() || minutes.len() > 2 {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    offset_from_minutes(sign * (hours * 60 + minutes)).map_err(|_| invalid())
}

/// Parse an `HH:MM` time of day
pub fn parse_time_of_day(s: &str) -> SessionResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| SessionError::InvalidTime(s.to_string()))
}

/// `UTC`, or `UTC±HH:MM`
pub fn offset_label(offset: FixedOffset) -> String {
    if offset.local_minus_utc() == 0 {
        "UTC".to_string()
    } else {
        format!("UTC{}", offset)
    }
}
