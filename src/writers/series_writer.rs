use crate::error::Result;
use crate::processors::PolarSeries;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes the polar coordinate series for an external renderer.
pub struct SeriesWriter {
    pretty: bool,
}

impl SeriesWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn to_json(&self, series: &PolarSeries) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(series)?
        } else {
            serde_json::to_string(series)?
        };
        Ok(json)
    }

    pub fn write_series(&self, series: &PolarSeries, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(self.to_json(series)?.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for SeriesWriter {
    fn default() -> Self {
        Self::new()
    }
}
