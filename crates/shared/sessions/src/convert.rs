//! Time-of-day conversion between zones

use chrono::{NaiveDate, NaiveTime};
use desk_ports::SessionResult;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::zone::{Zone, offset_label, parse_time_of_day, resolve_zone};

/// A time of day expressed in a target zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedTime {
    /// Zone as requested by the caller
    pub zone: String,
    /// Offset in effect at the converted instant
    pub offset: String,
    pub time: NaiveTime,
    /// Calendar days relative to the source date
    pub day_shift: i64,
    /// e.g. `22:00 UTC-05:00` or `01:00 +1d UTC+09:00`
    pub display: String,
}

/// Convert a wall-clock time on `date` from one zone to another,
/// returning the target time and the day shift
pub fn convert_time(time: NaiveTime, date: NaiveDate, from: Zone, to: Zone) -> (NaiveTime, i64) {
    let instant = from.to_utc(date.and_time(time));
    let local = to.local(instant);
    (local.time(), (local.date_naive() - date).num_days())
}

/// Resolve zones by name and convert `time` (`HH:MM`) on `date` into each
/// target. The date fixes which side of a daylight-saving change applies.
pub fn convert(
    time: &str,
    from: &str,
    targets: &[String],
    date: NaiveDate,
) -> SessionResult<Vec<ConvertedTime>> {
    let time = parse_time_of_day(time)?;
    let source = resolve_zone(from)?;
    let instant = source.to_utc(date.and_time(time));

    targets
        .iter()
        .map(|zone| {
            let target = resolve_zone(zone)?;
            let (converted, day_shift) = convert_time(time, date, source, target);
            let offset = offset_label(target.offset_at(instant));
            let day = match day_shift {
                0 => String::new(),
                n => format!(" {:+}d", n),
            };
            let display = format!("{}{} {}", converted.format("%H:%M"), day, offset);
            debug!("Converted {} {} on {} -> {}", time, from, date, display);
            Ok(ConvertedTime {
                zone: zone.clone(),
                offset,
                time: converted,
                day_shift,
                display,
            })
        })
        .collect()
}
