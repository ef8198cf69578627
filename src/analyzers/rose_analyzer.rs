use crate::models::CompassSector;
use crate::processors::{AnnualMaximaAggregator, RoseOutput};
use chrono::NaiveDateTime;

#[derive(Debug)]
pub struct RoseStatistics {
    pub total_readings: usize,
    pub time_range: Option<(NaiveDateTime, NaiveDateTime)>,
    pub years: Vec<i32>,
    pub speed_stats: Option<SpeedStats>,
    pub sector_stats: Vec<SectorStats>,
    pub skipped_current_lines: usize,
    pub skipped_extreme_lines: usize,
}

#[derive(Debug)]
pub struct SpeedStats {
    pub min_speed: f64,
    pub max_speed: f64,
    pub mean_speed: f64,
    pub max_speed_time: NaiveDateTime,
    pub max_speed_bearing: f64,
}

/// Per-sector view combining observations with the design current.
#[derive(Debug, PartialEq)]
pub struct SectorStats {
    pub sector: CompassSector,
    pub count: usize,
    pub max_speed: Option<f64>,
    pub design_speed: Option<f64>,
    pub exceedances: usize,
}

impl SectorStats {
    pub fn frequency_percentage(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (self.count as f64 / total as f64) * 100.0
        }
    }
}

pub struct RoseAnalyzer;

impl RoseAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, output: &RoseOutput) -> RoseStatistics {
        let readings = &output.readings;

        let time_range = match (readings.first(), readings.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        };

        let mut years: Vec<i32> = output.annual_maxima.iter().map(|r| r.year).collect();
        years.dedup();

        let speed_stats = readings.iter().fold(None, |stats: Option<SpeedStats>, r| {
            Some(match stats {
                None => SpeedStats {
                    min_speed: r.speed,
                    max_speed: r.speed,
                    mean_speed: r.speed,
                    max_speed_time: r.timestamp,
                    max_speed_bearing: r.bearing_deg,
                },
                Some(mut s) => {
                    s.min_speed = s.min_speed.min(r.speed);
                    if r.speed > s.max_speed {
                        s.max_speed = r.speed;
                        s.max_speed_time = r.timestamp;
                        s.max_speed_bearing = r.bearing_deg;
                    }
                    // Running sum; divided once below.
                    s.mean_speed += r.speed;
                    s
                }
            })
        });
        let speed_stats = speed_stats.map(|mut s| {
            s.mean_speed /= readings.len() as f64;
            s
        });

        let sector_maxima = AnnualMaximaAggregator::new().sector_maxima(&output.annual_maxima);

        let sector_stats = CompassSector::ALL
            .iter()
            .map(|&sector| {
                let design_speed = output
                    .extremes
                    .iter()
                    .filter(|e| e.sector == sector)
                    .map(|e| e.speed)
                    .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.max(s))));

                let in_sector = readings.iter().filter(|r| r.sector == sector);

                SectorStats {
                    sector,
                    count: in_sector.clone().count(),
                    max_speed: sector_maxima
                        .iter()
                        .find(|(s, _)| *s == sector)
                        .map(|(_, max)| *max),
                    design_speed,
                    exceedances: design_speed
                        .map(|design| in_sector.filter(|r| r.speed > design).count())
                        .unwrap_or(0),
                }
            })
            .collect();

        RoseStatistics {
            total_readings: readings.len(),
            time_range,
            years,
            speed_stats,
            sector_stats,
            skipped_current_lines: output.current_report.skipped,
            skipped_extreme_lines: output.extreme_report.skipped,
        }
    }
}

impl Default for RoseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RoseStatistics {
    pub fn summary(&self) -> String {
        let period = match self.time_range {
            Some((start, end)) => format!("{} to {}", start, end),
            None => "No readings".to_string(),
        };

        let speeds = match &self.speed_stats {
            Some(s) => format!(
                "{:.2} to {:.2} (mean {:.2})",
                s.min_speed, s.max_speed, s.mean_speed
            ),
            None => "No valid measurements".to_string(),
        };

        let years = if self.years.is_empty() {
            "none".to_string()
        } else {
            self.years
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "Readings: {} ({} current lines skipped, {} extreme lines skipped)\n\
            Period: {}\n\
            Years: {}\n\
            Speed Range: {}",
            self.total_readings,
            self.skipped_current_lines,
            self.skipped_extreme_lines,
            period,
            years,
            speeds
        )
    }

    pub fn detailed_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Current Rose Summary ===\n");
        summary.push_str(&self.summary());
        summary.push('\n');

        if let Some(s) = &self.speed_stats {
            summary.push_str(&format!(
                "Strongest Reading: {:.2} towards {:.1}° at {}\n",
                s.max_speed, s.max_speed_bearing, s.max_speed_time
            ));
        }

        summary.push_str("\nSector  Count   Freq%   Max     Design  Exceed\n");
        for stats in &self.sector_stats {
            summary.push_str(&format!(
                "{:<6}  {:>5}  {:>6.1}  {:>6}  {:>6}  {:>6}\n",
                stats.sector.label(),
                stats.count,
                stats.frequency_percentage(self.total_readings),
                format_optional(stats.max_speed),
                format_optional(stats.design_speed),
                stats.exceedances
            ));
        }

        let exceeding: Vec<&str> = self
            .sector_stats
            .iter()
            .filter(|s| s.exceedances > 0)
            .map(|s| s.sector.label())
            .collect();
        if !exceeding.is_empty() {
            summary.push_str(&format!(
                "\n⚠️  Observed speeds exceed the design current in: {}\n",
                exceeding.join(", ")
            ));
        }

        summary
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::{generate_rose, RoseInput, StepInterval};

    fn output(current: &str, extreme: &str) -> RoseOutput {
        let input = RoseInput::new("30-12-2024 00:00", StepInterval::new(true, false, false, false))
            .with_current_text(current)
            .with_extreme_text(extreme);
        generate_rose(&input).unwrap()
    }

    #[test]
    fn test_statistics() {
        let stats = RoseAnalyzer::new().analyze(&output(
            "1.0 0\n3.0 90\nBAD\n2.0 95\n5.0 180",
            "E 2.5\nS 6.0\nQ 1.0",
        ));

        assert_eq!(stats.total_readings, 4);
        assert_eq!(stats.years, vec![2024, 2025]);
        assert_eq!(stats.skipped_current_lines, 1);
        assert_eq!(stats.skipped_extreme_lines, 1);

        let speeds = stats.speed_stats.as_ref().unwrap();
        assert_eq!(speeds.min_speed, 1.0);
        assert_eq!(speeds.max_speed, 5.0);
        assert_eq!(speeds.mean_speed, 2.75);
        assert_eq!(speeds.max_speed_bearing, 180.0);

        let east = &stats.sector_stats[CompassSector::East.index()];
        assert_eq!(east.count, 2);
        assert_eq!(east.max_speed, Some(3.0));
        assert_eq!(east.design_speed, Some(2.5));
        assert_eq!(east.exceedances, 1);
        assert_eq!(east.frequency_percentage(stats.total_readings), 50.0);

        let south = &stats.sector_stats[CompassSector::South.index()];
        assert_eq!(south.exceedances, 0);

        let summary = stats.detailed_summary();
        assert!(summary.contains("Readings: 4"));
        assert!(summary.contains("exceed the design current in: E"));
    }

    #[test]
    fn test_empty_statistics() {
        let stats = RoseAnalyzer::new().analyze(&output("", ""));

        assert_eq!(stats.total_readings, 0);
        assert!(stats.time_range.is_none());
        assert!(stats.speed_stats.is_none());
        assert!(stats.sector_stats.iter().all(|s| s.count == 0));
        assert!(stats.summary().contains("No valid measurements"));
    }
}
