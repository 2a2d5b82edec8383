//! Wall-clock access for the wallpaper.
//!
//! A [`ClockSnapshot`] is captured fresh on every scheduler tick and never
//! retained between ticks. [`ClockSource`] is the seam that lets the
//! wallpaper run against the system clock or a manually driven one.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::WeekdayLabels;

/// A point-in-time reading of the clock, broken into display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    /// Hour of the day, 0-23.
    pub hour: u32,
    /// Minute of the hour, 0-59.
    pub minute: u32,
    /// Second of the minute, 0-59.
    pub second: u32,
    /// Calendar year.
    pub year: i32,
    /// Month of the year, 1-12.
    pub month: u32,
    /// Day of the month, 1-31.
    pub day: u32,
    /// Day of the week, 0 = Sunday through 6 = Saturday.
    pub weekday: u32,
}

impl ClockSnapshot {
    /// Breaks any chrono date-time into a snapshot.
    pub fn from_datetime<D: Datelike + Timelike>(dt: &D) -> Self {
        Self {
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            weekday: dt.weekday().num_days_from_sunday(),
        }
    }

    /// Builds a snapshot for a calendar date and time of day.
    ///
    /// Returns `None` when the fields do not form a valid date-time.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(|dt| Self::from_datetime(&dt))
    }

    /// Time of day as `HH:MM:SS`, every field zero-padded.
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Date as `YYYY-MM-DD <weekday>`, the label taken from `labels`.
    pub fn format_date(&self, labels: &WeekdayLabels) -> String {
        format!(
            "{}-{:02}-{:02} {}",
            self.year,
            self.month,
            self.day,
            labels.label(self.weekday)
        )
    }

    /// True when the snapshot sits exactly on the start of an hour.
    pub fn is_top_of_hour(&self) -> bool {
        self.minute == 0 && self.second == 0
    }
}

/// Something that can report the current instant.
pub trait ClockSource: Send + Sync {
    /// Capture the current time.
    fn now(&self) -> ClockSnapshot;
}

/// Local system time through chrono.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> ClockSnapshot {
        ClockSnapshot::from_datetime(&Local::now())
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a host (or a test) can keep one handle
/// and steer the time seen by the wallpaper that owns the other.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Jump to `instant`.
    pub fn set(&self, instant: NaiveDateTime) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Move forward by `seconds`.
    pub fn advance_secs(&self, seconds: i64) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += chrono::Duration::seconds(seconds);
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> ClockSnapshot {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        ClockSnapshot::from_datetime(&*current)
    }
}
