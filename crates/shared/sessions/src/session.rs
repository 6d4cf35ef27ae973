//! Trading sessions and their overlaps
//!
//! A session is a business-hours window in a financial center's local
//! time. Windows are converted to UTC for a given calendar date, with the
//! center's daylight-saving state on that date, and intersected to find
//! the liquid overlap periods.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};
use chrono_tz::Tz;
use desk_ports::{SessionError, SessionResult};
use serde::{Deserialize, Serialize};

use crate::zone::{Zone, offset_label};

const fn time_of_day(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("time of day out of range"),
    }
}

const EIGHT: NaiveTime = time_of_day(8, 0);
const NINE: NaiveTime = time_of_day(9, 0);
const HALF_PAST_FOUR: NaiveTime = time_of_day(16, 30);
const FIVE: NaiveTime = time_of_day(17, 0);
const SIX: NaiveTime = time_of_day(18, 0);

/// London fixing convention for the end of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LondonClose {
    #[default]
    #[serde(rename = "16:30")]
    HalfPastFour,
    #[serde(rename = "17:00")]
    Five,
}

impl LondonClose {
    pub fn time(&self) -> NaiveTime {
        match self {
            LondonClose::HalfPastFour => HALF_PAST_FOUR,
            LondonClose::Five => FIVE,
        }
    }
}

/// Business-hours window of one financial center
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingSession {
    pub center: String,
    pub zone: Zone,
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl TradingSession {
    pub fn new(
        center: impl Into<String>,
        zone: Zone,
        open: NaiveTime,
        close: NaiveTime,
    ) -> SessionResult<Self> {
        let center = center.into();
        if close <= open {
            return Err(SessionError::InvertedSession(center));
        }
        Ok(Self {
            center,
            zone,
            open,
            close,
        })
    }

    /// The session on `date` (local calendar date) as a UTC interval
    pub fn utc_window(&self, date: NaiveDate) -> SessionWindow {
        SessionWindow {
            start: self.zone.to_utc(date.and_time(self.open)),
            end: self.zone.to_utc(date.and_time(self.close)),
        }
    }
}

/// Half-open UTC interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SessionWindow {
    /// Intersection with another window, `None` when they do not overlap
    pub fn overlap(&self, other: &SessionWindow) -> Option<SessionWindow> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(SessionWindow { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// `HH:MM - HH:MM[ +1d] <offset>` on the zone's wall clock
    pub fn format_in(&self, zone: Zone) -> String {
        format_range(zone.local(self.start), zone.local(self.end))
    }
}

/// Format a range without dates, marking a next-day end
pub fn format_range(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> String {
    let mut span = format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"));
    if start.date_naive() != end.date_naive() {
        span.push_str(" +1d");
    }
    span.push(' ');
    span.push_str(&offset_label(*start.offset()));
    span
}

/// New York, London, Tokyo and Sydney business hours
pub fn default_sessions(london_close: LondonClose) -> Vec<TradingSession> {
    vec![
        TradingSession {
            center: "New York".to_string(),
            zone: Zone::Named(Tz::America__New_York),
            open: EIGHT,
            close: FIVE,
        },
        TradingSession {
            center: "London".to_string(),
            zone: Zone::Named(Tz::Europe__London),
            open: EIGHT,
            close: london_close.time(),
        },
        TradingSession {
            center: "Tokyo".to_string(),
            zone: Zone::Named(Tz::Asia__Tokyo),
            open: NINE,
            close: SIX,
        },
        TradingSession {
            center: "Sydney".to_string(),
            zone: Zone::Named(Tz::Australia__Sydney),
            open: EIGHT,
            close: FIVE,
        },
    ]
}

/// One row of the session table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRow {
    pub center: String,
    pub local: String,
    pub utc: String,
    pub viewer: String,
    pub window: SessionWindow,
}

/// Session hours in local time, UTC and the viewer's zone
pub fn session_table(
    sessions: &[TradingSession],
    date: NaiveDate,
    viewer: Zone,
) -> Vec<SessionRow> {
    sessions
        .iter()
        .map(|session| {
            let window = session.utc_window(date);
            SessionRow {
                center: session.center.clone(),
                local: window.format_in(session.zone),
                utc: window.format_in(Zone::UTC),
                viewer: window.format_in(viewer),
                window,
            }
        })
        .collect()
}

/// Overlap of two named sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOverlap {
    pub pair: String,
    pub window: Option<SessionWindow>,
    pub utc: Option<String>,
    pub viewer: Option<String>,
}

/// Overlaps of consecutive centers, each pair given as indices into
/// `sessions`
pub fn overlaps(
    sessions: &[TradingSession],
    pairs: &[(usize, usize)],
    date: NaiveDate,
    viewer: Zone,
) -> Vec<SessionOverlap> {
    pairs
        .iter()
        .filter_map(|&(a, b)| Some((sessions.get(a)?, sessions.get(b)?)))
        .map(|(a, b)| {
            let window = a.utc_window(date).overlap(&b.utc_window(date));
            SessionOverlap {
                pair: format!("{}–{}", a.center, b.center),
                window,
                utc: window.map(|w| w.format_in(Zone::UTC)),
                viewer: window.map(|w| w.format_in(viewer)),
            }
        })
        .collect()
}

/// London–New York, Tokyo–London, Sydney–Tokyo over [`default_sessions`]
pub const STANDARD_OVERLAPS: [(usize, usize); 3] = [(1, 0), (2, 1), (3, 2)];
