use crate::analyzers::RoseAnalyzer;
use crate::cli::args::{Cli, Commands, GenerateArgs};
use crate::error::Result;
use crate::models::CompassSector;
use crate::processors::{generate_rose, RoseInput, RoseOutput, SectorBinner, StepInterval, TieBreak};
use crate::readers::{read_optional_text, read_text, RecordParser};
use crate::utils::constants::{ANNUAL_MAXIMA_FILE, CHART_FILE, EXTREMES_FILE, READINGS_FILE, SERIES_FILE};
use crate::utils::{generate_default_output_dir, init_logging, Settings};
use crate::writers::{ChartWriter, SeriesWriter, TableWriter};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// A `generate` run with every flag resolved against the settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratePlan {
    pub start_time: String,
    pub step: StepInterval,
    pub tie_break: TieBreak,
    pub output_dir: PathBuf,
    pub delimiter: String,
    /// `None` when no chart is drawn.
    pub chart_size: Option<u32>,
    pub chart_title: Option<String>,
}

/// Lay the command-line flags over the loaded settings. A flag that was
/// given always wins; an absent one takes the settings value.
pub fn plan_generate(args: &GenerateArgs, settings: &Settings) -> GeneratePlan {
    let step = StepInterval::new(
        args.day.unwrap_or(settings.step.day),
        args.hour.unwrap_or(settings.step.hour),
        args.minute.unwrap_or(settings.step.minute),
        args.second.unwrap_or(settings.step.second),
    );

    let chart_enabled = !args.no_chart && settings.chart.enabled;

    GeneratePlan {
        start_time: args
            .start_time
            .clone()
            .unwrap_or_else(|| settings.start_time.clone()),
        step,
        tie_break: args.tie_break.unwrap_or(settings.tie_break),
        output_dir: args
            .output_dir
            .clone()
            .or_else(|| settings.output_dir.clone())
            .unwrap_or_else(generate_default_output_dir),
        delimiter: args
            .delimiter
            .clone()
            .unwrap_or_else(|| settings.delimiter.clone()),
        chart_size: chart_enabled.then(|| args.chart_size.unwrap_or(settings.chart.size)),
        chart_title: settings.chart.title.clone(),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => {
            let plan = plan_generate(&args, &settings);

            // Writers are configured first so bad flags fail before any parsing.
            let table_writer = TableWriter::new().with_delimiter(&plan.delimiter)?;
            let chart = match plan.chart_size {
                Some(size) => Some(
                    ChartWriter::new()
                        .with_size(size)?
                        .with_title(plan.chart_title.clone()),
                ),
                None => None,
            };

            let input = RoseInput::new(plan.start_time.clone(), plan.step)
                .with_current_text(read_text(&args.current)?)
                .with_extreme_text(read_optional_text(args.extreme.as_deref())?)
                .with_tie_break(plan.tie_break);

            println!("Generating current rose...");
            println!("Start time: {}, step: {}", input.start_time, plan.step.describe());

            // Fails before anything is written when the start time is invalid.
            let output = generate_rose(&input)?;

            let stats = RoseAnalyzer::new().analyze(&output);
            println!("\n{}", stats.detailed_summary());

            if args.print_tables {
                print_all_tables(&table_writer, &output)?;
            }

            write_outputs(&output, &plan.output_dir, &table_writer, chart.as_ref())?;

            info!(dir = %plan.output_dir.display(), "Wrote current rose outputs");
            println!("\nOutputs written to {}", plan.output_dir.display());
            println!("Processing complete!");
        }

        Commands::Validate { current, extreme } => {
            println!("Validating pasted data...");

            let current_text = read_optional_text(current.as_deref())?;
            let extreme_text = read_optional_text(extreme.as_deref())?;

            print!("{}", validation_report(&current_text, &extreme_text));
        }

        Commands::Sectors => {
            print!("{}", sector_table(settings.tie_break));
        }
    }

    Ok(())
}

/// Kept and skipped line counts for both pasted blocks.
pub fn validation_report(current_text: &str, extreme_text: &str) -> String {
    let current_report = RecordParser::current().report(current_text);
    let extreme_report = RecordParser::extreme().report(extreme_text);
    let skipped = current_report.skipped + extreme_report.skipped;

    let mut report = format!(
        "Current data: {} ({:.1}% usable)\nExtreme data: {} ({:.1}% usable)\n",
        current_report.summary(),
        current_report.success_rate(),
        extreme_report.summary(),
        extreme_report.success_rate()
    );

    if skipped == 0 {
        report.push_str("✅ All data lines parsed\n");
    } else {
        report.push_str(&format!(
            "⚠️  {} lines will be skipped (run with --verbose to list them)\n",
            skipped
        ));
    }

    report
}

/// The compass table with the bearings each sector covers.
pub fn sector_table(tie_break: TieBreak) -> String {
    let mut table = format!("Sector  Centre   Covers (tie rule: {})\n", tie_break);
    for sector in CompassSector::ALL {
        let (from, to) = SectorBinner::sector_span(sector);
        table.push_str(&format!(
            "{:<6}  {:>6.1}°  {:>5.1}° to {:>5.1}°\n",
            sector.label(),
            sector.degrees(),
            from,
            to
        ));
    }
    table
}

fn print_all_tables(writer: &TableWriter, output: &RoseOutput) -> Result<()> {
    let stdout = io::stdout();

    println!("\n📊 Parsed Current Data");
    writer.write_readings_to(&output.readings, stdout.lock())?;

    println!("\n📊 Annual Maximum per Direction per Year");
    writer.write_annual_maxima_to(&output.annual_maxima, stdout.lock())?;

    println!("\n📊 Extreme Data");
    writer.write_extremes_to(&output.extremes, stdout.lock())?;

    Ok(())
}

/// Write the three tables, the coordinate series and optionally the chart.
pub fn write_outputs(
    output: &RoseOutput,
    output_dir: &Path,
    tables: &TableWriter,
    chart: Option<&ChartWriter>,
) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;

    tables.write_readings(&output.readings, &output_dir.join(READINGS_FILE))?;
    tables.write_annual_maxima(&output.annual_maxima, &output_dir.join(ANNUAL_MAXIMA_FILE))?;
    tables.write_extremes(&output.extremes, &output_dir.join(EXTREMES_FILE))?;
    SeriesWriter::new().write_series(&output.series, &output_dir.join(SERIES_FILE))?;

    if let Some(chart) = chart {
        chart.write_chart(&output.series, &output_dir.join(CHART_FILE))?;
    }

    Ok(())
}

/// Run the pipeline on already loaded text and write everything to `output_dir`.
/// Nothing is written when the run fails.
pub fn generate_to_dir(input: &RoseInput, output_dir: &Path, with_chart: bool) -> Result<RoseOutput> {
    let output = generate_rose(input)?;
    let chart = with_chart.then(ChartWriter::new);

    write_outputs(&output, output_dir, &TableWriter::new(), chart.as_ref())?;

    Ok(output)
}
