use crate::error::{ProcessingError, Result};
use crate::models::{CurrentReading, TimestampedReading};
use crate::processors::sector_binner::SectorBinner;
use chrono::{Datelike, Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fixed textual format of the start time: `dd-mm-yyyy hh:mm`, 24-hour clock.
pub const START_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Step between consecutive readings, the sum of the enabled units.
///
/// All units off is a valid zero step: every reading then shares the start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInterval {
    pub day: bool,
    pub hour: bool,
    pub minute: bool,
    pub second: bool,
}

impl Default for StepInterval {
    fn default() -> Self {
        Self::hourly()
    }
}

impl StepInterval {
    pub fn new(day: bool, hour: bool, minute: bool, second: bool) -> Self {
        Self {
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn hourly() -> Self {
        Self::new(false, true, false, false)
    }

    pub fn zero() -> Self {
        Self::new(false, false, false, false)
    }

    pub fn is_zero(&self) -> bool {
        !(self.day || self.hour || self.minute || self.second)
    }

    pub fn duration(&self) -> Duration {
        let mut step = Duration::zero();
        if self.day {
            step = step + Duration::days(1);
        }
        if self.hour {
            step = step + Duration::hours(1);
        }
        if self.minute {
            step = step + Duration::minutes(1);
        }
        if self.second {
            step = step + Duration::seconds(1);
        }
        step
    }

    /// Human readable form such as `1 day + 1 hour`, or `none`.
    pub fn describe(&self) -> String {
        let units: Vec<&str> = [
            (self.day, "1 day"),
            (self.hour, "1 hour"),
            (self.minute, "1 minute"),
            (self.second, "1 second"),
        ]
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, unit)| *unit)
        .collect();

        if units.is_empty() {
            "none".to_string()
        } else {
            units.join(" + ")
        }
    }
}

/// Parse the start time, reporting the offending text on failure.
/// The format is fixed: surrounding whitespace is not accepted.
pub fn parse_start_time(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, START_TIME_FORMAT).map_err(|source| {
        ProcessingError::StartTime {
            input: input.to_string(),
            source,
        }
    })
}

/// Places readings on a regular time axis by sequence position.
pub struct TimeAssigner {
    start: NaiveDateTime,
    step: Duration,
}

impl TimeAssigner {
    pub fn new(start: NaiveDateTime, interval: StepInterval) -> Self {
        Self {
            start,
            step: interval.duration(),
        }
    }

    pub fn from_start_text(start: &str, interval: StepInterval) -> Result<Self> {
        Ok(Self::new(parse_start_time(start)?, interval))
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// `start + index * step`
    pub fn timestamp_at(&self, index: usize) -> Result<NaiveDateTime> {
        let overflow = || ProcessingError::TimestampOverflow { index };

        let multiplier = i32::try_from(index).map_err(|_| overflow())?;
        let offset = self.step.checked_mul(multiplier).ok_or_else(overflow)?;

        self.start.checked_add_signed(offset).ok_or_else(overflow)
    }

    pub fn timestamps(&self, count: usize) -> Result<Vec<NaiveDateTime>> {
        (0..count).map(|i| self.timestamp_at(i)).collect()
    }

    /// Timestamp, year and sector for every reading, in input order.
    pub fn assign(
        &self,
        readings: &[CurrentReading],
        binner: &SectorBinner,
    ) -> Result<Vec<TimestampedReading>> {
        let timestamped = readings
            .iter()
            .enumerate()
            .map(|(i, reading)| {
                let timestamp = self.timestamp_at(i)?;
                Ok(TimestampedReading {
                    timestamp,
                    year: timestamp.year(),
                    speed: reading.speed,
                    bearing_deg: reading.bearing_deg,
                    sector: binner.bin(reading.bearing_deg),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if let (Some(first), Some(last)) = (timestamped.first(), timestamped.last()) {
            debug!(
                readings = timestamped.len(),
                first = %first.timestamp,
                last = %last.timestamp,
                "Assigned timestamps"
            );
        }

        Ok(timestamped)
    }
}
