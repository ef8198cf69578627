use crate::error::Result;
use crate::models::{AnnualMaxRecord, ExtremeReading, TimestampedReading};
use crate::processors::annual_maxima::AnnualMaximaAggregator;
use crate::processors::polar_mapper::{PolarCoordinateMapper, PolarSeries};
use crate::processors::sector_binner::{SectorBinner, TieBreak};
use crate::processors::time_assigner::{StepInterval, TimeAssigner};
use crate::readers::{ParseReport, RecordParser};
use tracing::{info, warn};

/// Everything one "generate" run needs. Built once and never mutated.
#[derive(Debug, Clone)]
pub struct RoseInput {
    pub start_time: String,
    pub step: StepInterval,
    pub current_text: String,
    pub extreme_text: String,
    pub tie_break: TieBreak,
}

impl RoseInput {
    pub fn new(start_time: impl Into<String>, step: StepInterval) -> Self {
        Self {
            start_time: start_time.into(),
            step,
            current_text: String::new(),
            extreme_text: String::new(),
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_current_text(mut self, text: impl Into<String>) -> Self {
        self.current_text = text.into();
        self
    }

    pub fn with_extreme_text(mut self, text: impl Into<String>) -> Self {
        self.extreme_text = text.into();
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// Tables and plot series derived from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RoseOutput {
    pub readings: Vec<TimestampedReading>,
    pub annual_maxima: Vec<AnnualMaxRecord>,
    pub extremes: Vec<ExtremeReading>,
    pub series: PolarSeries,
    pub current_report: ParseReport,
    pub extreme_report: ParseReport,
}

/// Run the whole current rose pipeline.
///
/// Malformed data lines are dropped; only an unparsable start time (or a
/// timestamp beyond the calendar range) aborts the run, with no partial output.
pub fn generate_rose(input: &RoseInput) -> Result<RoseOutput> {
    let assigner = TimeAssigner::from_start_text(&input.start_time, input.step)?;
    let binner = SectorBinner::with_tie_break(input.tie_break);

    let (currents, current_report) = RecordParser::parse_current_with_report(&input.current_text);
    let (extremes, extreme_report) = RecordParser::parse_extreme_with_report(&input.extreme_text);

    info!(
        "Parsed {} current readings ({} skipped) and {} extreme readings ({} skipped)",
        current_report.parsed, current_report.skipped, extreme_report.parsed, extreme_report.skipped
    );
    if currents.is_empty() {
        warn!("No valid current readings; the rose will contain no observations");
    }

    let readings = assigner.assign(&currents, &binner)?;
    let annual_maxima = AnnualMaximaAggregator::new().aggregate(&readings);
    let series = PolarCoordinateMapper::new().map(&readings, &extremes, &annual_maxima);

    info!(
        step = %input.step.describe(),
        tie_break = %input.tie_break,
        "Derived {} annual maxima",
        annual_maxima.len()
    );

    Ok(RoseOutput {
        readings,
        annual_maxima,
        extremes,
        series,
        current_report,
        extreme_report,
    })
}
