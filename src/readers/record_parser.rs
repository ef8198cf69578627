use crate::models::{CompassSector, CurrentReading, ExtremeReading};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Column layout of a pasted data block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// `speed<ws>bearing`, the current time series.
    SpeedThenBearing,
    /// `label<ws>speed`, the directional design currents.
    LabelThenSpeed,
}

/// Line counts from one parse run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub total_lines: usize,
    pub parsed: usize,
    pub skipped: usize,
    pub blank: usize,
}

impl ParseReport {
    pub fn success_rate(&self) -> f64 {
        let data_lines = self.parsed + self.skipped;
        if data_lines == 0 {
            0.0
        } else {
            100.0 * self.parsed as f64 / data_lines as f64
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} lines: {} parsed, {} skipped, {} blank",
            self.total_lines, self.parsed, self.skipped, self.blank
        )
    }
}

/// Turns loosely formatted pasted text into validated records.
///
/// Malformed lines (wrong token count, bad number, unknown label) are dropped
/// and the surviving records keep their input order.
pub struct RecordParser {
    shape: RecordShape,
}

impl RecordParser {
    pub fn new(shape: RecordShape) -> Self {
        Self { shape }
    }

    pub fn current() -> Self {
        Self::new(RecordShape::SpeedThenBearing)
    }

    pub fn extreme() -> Self {
        Self::new(RecordShape::LabelThenSpeed)
    }

    /// Parse `speed bearing` lines.
    pub fn parse_current(text: &str) -> Vec<CurrentReading> {
        Self::parse_current_with_report(text).0
    }

    /// Parse `label speed` lines.
    pub fn parse_extreme(text: &str) -> Vec<ExtremeReading> {
        Self::parse_extreme_with_report(text).0
    }

    pub fn parse_current_with_report(text: &str) -> (Vec<CurrentReading>, ParseReport) {
        Self::current().parse_with(text, parse_current_line)
    }

    pub fn parse_extreme_with_report(text: &str) -> (Vec<ExtremeReading>, ParseReport) {
        Self::extreme().parse_with(text, parse_extreme_line)
    }

    /// Count what this parser's shape would keep without building records.
    pub fn report(&self, text: &str) -> ParseReport {
        match self.shape {
            RecordShape::SpeedThenBearing => Self::parse_current_with_report(text).1,
            RecordShape::LabelThenSpeed => Self::parse_extreme_with_report(text).1,
        }
    }

    fn parse_with<T>(
        &self,
        text: &str,
        parse_line: impl Fn(&str) -> Option<T>,
    ) -> (Vec<T>, ParseReport) {
        let mut report = ParseReport::default();
        let mut records = Vec::new();

        for (line_number, line) in text.lines().enumerate() {
            report.total_lines += 1;

            if line.trim().is_empty() {
                report.blank += 1;
                continue;
            }

            match parse_line(line) {
                Some(record) => {
                    report.parsed += 1;
                    records.push(record);
                }
                None => {
                    report.skipped += 1;
                    debug!(
                        line = line_number + 1,
                        shape = ?self.shape,
                        content = line,
                        "Skipping malformed line"
                    );
                }
            }
        }

        (records, report)
    }
}

/// Normalize decimal commas and split into exactly two tokens.
fn split_pair(line: &str) -> Option<(String, String)> {
    let normalized = line.replace(',', ".");
    let mut tokens = normalized.split_whitespace();

    let first = tokens.next()?;
    let second = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    Some((first.to_string(), second.to_string()))
}

/// Parse one `speed bearing` line.
pub fn parse_current_line(line: &str) -> Option<CurrentReading> {
    let (speed, bearing) = split_pair(line)?;

    let speed = speed.parse::<f64>().ok()?;
    let bearing = bearing.parse::<f64>().ok()?;

    CurrentReading::new(speed, bearing).ok()
}

/// Parse one `label speed` line. The bearing comes from the compass table.
pub fn parse_extreme_line(line: &str) -> Option<ExtremeReading> {
    let (label, speed) = split_pair(line)?;

    let sector = CompassSector::from_label(&label)?;
    let speed = speed.parse::<f64>().ok()?;

    ExtremeReading::new(sector, speed).ok()
}
