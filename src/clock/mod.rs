//! Wall-clock source and clock panel text.
//!
//! The clock panel is redrawn on its own one-second refresh; it shares
//! nothing with the timer engine. Users cycle through a configured list of
//! time zones by clicking the panel or pressing `t`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::LayoutMode;

/// Supplies the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ============================================================================
// ClockZone
// ============================================================================

/// Country name and flag shown for well-known zones.
const ZONE_LABELS: &[(Tz, &str, &str)] = &[
    (Tz::Europe__Paris, "France", "🇫🇷"),
    (Tz::Europe__London, "UK", "🇬🇧"),
];

/// Flag used for zones without a country label.
const DEFAULT_FLAG: &str = "🌍";

/// A time zone name that is neither `local` nor a known IANA zone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time zone: {0}")]
pub struct UnknownZone(pub String);

/// Time zone shown by the clock panel.
///
/// Written in config and on the command line as `local` or an IANA name
/// such as `Europe/Paris`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ClockZone {
    /// The system's local zone
    Local,
    /// A named IANA zone
    Named(Tz),
}

impl ClockZone {
    pub const UTC: ClockZone = ClockZone::Named(Tz::UTC);

    /// Config spelling of the zone.
    pub fn name(&self) -> &'static str {
        match self {
            ClockZone::Local => "local",
            ClockZone::Named(tz) => tz.name(),
        }
    }

    /// Flag shown next to the time.
    pub fn flag(&self) -> &'static str {
        self.label().map_or(DEFAULT_FLAG, |(_, flag)| flag)
    }

    /// Panel title, e.g. `Time in France 🇫🇷`.
    pub fn title(&self) -> String {
        match (self, self.label()) {
            (ClockZone::Local, _) => "Local time".to_string(),
            (_, Some((country, flag))) => format!("Time in {} {}", country, flag),
            (ClockZone::Named(tz), None) => format!("Time in {}", tz.name()),
        }
    }

    fn label(&self) -> Option<(&'static str, &'static str)> {
        let ClockZone::Named(tz) = self else {
            return None;
        };
        ZONE_LABELS
            .iter()
            .find(|(known, _, _)| known == tz)
            .map(|(_, country, flag)| (*country, *flag))
    }
}

impl fmt::Display for ClockZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClockZone {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("local") {
            return Ok(ClockZone::Local);
        }
        s.parse::<Tz>()
            .map(ClockZone::Named)
            .map_err(|_| UnknownZone(s.to_string()))
    }
}

impl TryFrom<String> for ClockZone {
    type Error = UnknownZone;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockZone> for String {
    fn from(zone: ClockZone) -> Self {
        zone.name().to_string()
    }
}

/// Zones shown when nothing is configured.
pub fn default_zones() -> Vec<ClockZone> {
    vec![
        ClockZone::Named(Tz::Europe__Paris),
        ClockZone::Named(Tz::Europe__London),
    ]
}

// ============================================================================
// ZoneCycle
// ============================================================================

/// The configured zones and the one currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneCycle {
    zones: Vec<ClockZone>,
    index: usize,
}

impl ZoneCycle {
    /// Starts at the first zone. An empty list falls back to local time.
    pub fn new(zones: Vec<ClockZone>) -> Self {
        let zones = if zones.is_empty() {
            vec![ClockZone::Local]
        } else {
            zones
        };
        Self { zones, index: 0 }
    }

    pub fn current(&self) -> ClockZone {
        self.zones[self.index]
    }

    /// Moves to the next zone, wrapping around, and returns it.
    pub fn advance(&mut self) -> ClockZone {
        self.index = (self.index + 1) % self.zones.len();
        self.current()
    }

    pub fn zones(&self) -> &[ClockZone] {
        &self.zones
    }
}

impl Default for ZoneCycle {
    fn default() -> Self {
        Self::new(default_zones())
    }
}

// ============================================================================
// ClockView
// ============================================================================

/// Text for the clock panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    /// Panel title
    pub title: String,
    /// `HH:MM:SS` (full) or `<flag> HH:MM DD/MM` (compact)
    pub time: String,
    /// Long date, empty in the compact layout
    pub date: String,
}

/// Builds the clock panel text for an instant.
pub fn clock_view(now: DateTime<Utc>, zone: ClockZone, mode: LayoutMode) -> ClockView {
    match zone {
        ClockZone::Local => format_view(&now.with_timezone(&Local), zone, mode),
        ClockZone::Named(tz) => format_view(&now.with_timezone(&tz), zone, mode),
    }
}

fn format_view<Z>(time: &DateTime<Z>, zone: ClockZone, mode: LayoutMode) -> ClockView
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    match mode {
        LayoutMode::Full => ClockView {
            title: zone.title(),
            time: time.format("%H:%M:%S").to_string(),
            date: time.format("%A, %d %B %Y").to_string(),
        },
        LayoutMode::Compact => ClockView {
            title: zone.title(),
            time: format!("{} {}", zone.flag(), time.format("%H:%M %d/%m")),
            date: String::new(),
        },
    }
}
