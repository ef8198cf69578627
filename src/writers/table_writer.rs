use crate::error::{ProcessingError, Result};
use crate::models::{AnnualMaxRecord, ExtremeReading, TimestampedReading};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const READINGS_HEADER: [&str; 5] = ["timestamp", "year", "speed", "bearing_deg", "sector"];
pub const ANNUAL_MAXIMA_HEADER: [&str; 3] = ["year", "sector", "max_speed"];
pub const EXTREMES_HEADER: [&str; 3] = ["sector", "bearing_deg", "speed"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct ReadingRow<'a> {
    timestamp: String,
    year: i32,
    speed: f64,
    bearing_deg: f64,
    sector: &'a str,
}

#[derive(Serialize)]
struct AnnualMaxRow<'a> {
    year: i32,
    sector: &'a str,
    max_speed: f64,
}

#[derive(Serialize)]
struct ExtremeRow<'a> {
    sector: &'a str,
    bearing_deg: f64,
    speed: f64,
}

/// Writes the three result tables as delimited text.
///
/// Headers are always written, so an empty table is still a valid file.
pub struct TableWriter {
    delimiter: u8,
}

impl TableWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: &str) -> Result<Self> {
        self.delimiter = match delimiter {
            "," | "comma" => b',',
            "\t" | "tab" => b'\t',
            ";" | "semicolon" => b';',
            _ => {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Unsupported delimiter: {}",
                    delimiter
                )))
            }
        };
        Ok(self)
    }

    pub fn write_readings(&self, readings: &[TimestampedReading], path: &Path) -> Result<()> {
        self.write_readings_to(readings, File::create(path)?)
    }

    pub fn write_annual_maxima(&self, records: &[AnnualMaxRecord], path: &Path) -> Result<()> {
        self.write_annual_maxima_to(records, File::create(path)?)
    }

    pub fn write_extremes(&self, extremes: &[ExtremeReading], path: &Path) -> Result<()> {
        self.write_extremes_to(extremes, File::create(path)?)
    }

    pub fn write_readings_to<W: Write>(&self, readings: &[TimestampedReading], sink: W) -> Result<()> {
        let rows = readings.iter().map(|r| ReadingRow {
            timestamp: r.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            year: r.year,
            speed: r.speed,
            bearing_deg: r.bearing_deg,
            sector: r.sector.label(),
        });
        self.write_rows(&READINGS_HEADER, rows, sink)
    }

    pub fn write_annual_maxima_to<W: Write>(&self, records: &[AnnualMaxRecord], sink: W) -> Result<()> {
        let rows = records.iter().map(|r| AnnualMaxRow {
            year: r.year,
            sector: r.sector.label(),
            max_speed: r.max_speed,
        });
        self.write_rows(&ANNUAL_MAXIMA_HEADER, rows, sink)
    }

    pub fn write_extremes_to<W: Write>(&self, extremes: &[ExtremeReading], sink: W) -> Result<()> {
        let rows = extremes.iter().map(|e| ExtremeRow {
            sector: e.sector.label(),
            bearing_deg: e.bearing_deg,
            speed: e.speed,
        });
        self.write_rows(&EXTREMES_HEADER, rows, sink)
    }

    fn write_rows<W, T, I>(&self, header: &[&str], rows: I, sink: W) -> Result<()>
    where
        W: Write,
        T: Serialize,
        I: IntoIterator<Item = T>,
    {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(sink);

        writer.write_record(header)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}
