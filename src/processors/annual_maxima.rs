use crate::models::{AnnualMaxRecord, CompassSector, TimestampedReading};
use std::collections::BTreeMap;
use tracing::debug;

/// Empirical annual maxima per compass sector.
pub struct AnnualMaximaAggregator;

impl AnnualMaximaAggregator {
    pub fn new() -> Self {
        Self
    }

    /// One record per non-empty (year, sector) group, ordered by year and
    /// then by compass table order.
    pub fn aggregate(&self, readings: &[TimestampedReading]) -> Vec<AnnualMaxRecord> {
        let mut grouped: BTreeMap<(i32, CompassSector), f64> = BTreeMap::new();

        for reading in readings {
            grouped
                .entry((reading.year, reading.sector))
                .and_modify(|max| *max = max.max(reading.speed))
                .or_insert(reading.speed);
        }

        debug!(
            readings = readings.len(),
            groups = grouped.len(),
            "Aggregated annual maxima"
        );

        grouped
            .into_iter()
            .map(|((year, sector), max_speed)| AnnualMaxRecord::new(year, sector, max_speed))
            .collect()
    }

    /// Largest speed per sector across all years, in table order.
    pub fn sector_maxima(&self, records: &[AnnualMaxRecord]) -> Vec<(CompassSector, f64)> {
        let mut maxima: BTreeMap<CompassSector, f64> = BTreeMap::new();

        for record in records {
            maxima
                .entry(record.sector)
                .and_modify(|max| *max = max.max(record.max_speed))
                .or_insert(record.max_speed);
        }

        maxima.into_iter().collect()
    }
}

impl Default for AnnualMaximaAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompassSector::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn reading(year: i32, sector: CompassSector, speed: f64) -> TimestampedReading {
        TimestampedReading {
            timestamp: NaiveDate::from_ymd_opt(year, 6, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            year,
            speed,
            bearing_deg: sector.degrees(),
            sector,
        }
    }

    #[test]
    fn test_group_maxima() {
        let readings = vec![
            reading(2025, West, 1.2),
            reading(2024, North, 0.8),
            reading(2025, West, 2.7),
            reading(2024, NorthWest, 1.1),
            reading(2024, North, 1.9),
            reading(2025, North, 0.3),
            reading(2025, West, 2.1),
        ];

        let maxima = AnnualMaximaAggregator::new().aggregate(&readings);

        assert_eq!(
            maxima,
            vec![
                AnnualMaxRecord::new(2024, North, 1.9),
                AnnualMaxRecord::new(2024, NorthWest, 1.1),
                AnnualMaxRecord::new(2025, North, 0.3),
                AnnualMaxRecord::new(2025, West, 2.7),
            ]
        );
    }

    #[test]
    fn test_maxima_bound_every_member() {
        let readings: Vec<TimestampedReading> = (0..200)
            .map(|i| {
                let sector = CompassSector::from_index(i * 7);
                let speed = ((i * 37) % 101) as f64 / 10.0;
                reading(2020 + (i % 3) as i32, sector, speed)
            })
            .collect();

        let maxima = AnnualMaximaAggregator::new().aggregate(&readings);

        for record in &maxima {
            let members: Vec<f64> = readings
                .iter()
                .filter(|r| r.year == record.year && r.sector == record.sector)
                .map(|r| r.speed)
                .collect();
            assert!(!members.is_empty());
            assert_eq!(record.max_speed, members.iter().cloned().fold(f64::MIN, f64::max));
        }
    }

    #[test]
    fn test_order_independent_of_input() {
        let mut readings = vec![
            reading(2023, South, 1.0),
            reading(2021, East, 2.0),
            reading(2023, NorthEast, 3.0),
            reading(2021, East, 4.0),
        ];
        let forward = AnnualMaximaAggregator::new().aggregate(&readings);
        readings.reverse();
        let backward = AnnualMaximaAggregator::new().aggregate(&readings);

        assert_eq!(forward, backward);
        assert_eq!(forward[0], AnnualMaxRecord::new(2021, East, 4.0));
        assert_eq!(forward[1].sector, NorthEast);
    }

    #[test]
    fn test_empty_input() {
        assert!(AnnualMaximaAggregator::new().aggregate(&[]).is_empty());
    }

    #[test]
    fn test_sector_maxima() {
        let records = vec![
            AnnualMaxRecord::new(2024, West, 2.0),
            AnnualMaxRecord::new(2024, North, 1.0),
            AnnualMaxRecord::new(2025, West, 3.5),
        ];

        assert_eq!(
            AnnualMaximaAggregator::new().sector_maxima(&records),
            vec![(North, 1.0), (West, 3.5)]
        );
    }
}
