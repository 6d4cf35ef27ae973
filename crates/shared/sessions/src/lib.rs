//! Desk Sessions
//!
//! Session-time arithmetic for the dealing desk:
//!
//! - **Sessions**: business-hours windows of New York, London, Tokyo and
//!   Sydney, converted to UTC for a given date
//! - **Overlaps**: intersections of adjacent sessions, where liquidity peaks
//! - **Conversion**: time of day between zones with day-shift tracking
//! - **Clocks**: system and fixed implementations of the `Clock` port
//!
//! Zones resolve through the tz database, so session windows and
//! conversions follow daylight saving on the date asked for. Abbreviations
//! map to the IANA zone that uses them.
//!
//! ## Usage
//!
//! ```ignore
//! use desk_sessions::{LondonClose, STANDARD_OVERLAPS, default_sessions, overlaps, resolve_zone};
//!
//! let sessions = default_sessions(LondonClose::HalfPastFour);
//! let viewer = resolve_zone("Asia/Singapore")?;
//! let rows = overlaps(&sessions, &STANDARD_OVERLAPS, date, viewer);
//! ```

mod clock;
mod convert;
mod session;
mod zone;

pub use clock::{FixedClock, SystemClock};
pub use convert::{ConvertedTime, convert, convert_time};
pub use session::{
    LondonClose, STANDARD_OVERLAPS, SessionOverlap, SessionRow, SessionWindow, TradingSession,
    default_sessions, format_range, overlaps, session_table,
};
pub use zone::{
    ZONE_ABBREVIATIONS, Zone, offset_from_minutes, offset_label, parse_offset, parse_time_of_day,
    resolve_zone,
};

// Re-export the Clock trait for convenience
pub use desk_ports::Clock;
