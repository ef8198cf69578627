//! Plot-ready polar coordinates for the current rose.
//!
//! All three series share one angular convention: θ = 0 points North (up on
//! the page) and θ increases clockwise, so θ is simply the compass bearing in
//! radians. A renderer built on a mathematical polar axis (0 at East,
//! counter-clockwise) must be configured with zero location `N` and
//! direction `-1` before plotting these values; [`PolarPoint::to_screen`]
//! applies the same convention for renderers that work in pixel space.

use crate::models::{AnnualMaxRecord, ExtremeReading, TimestampedReading};
use serde::{Deserialize, Serialize};

/// Angular width of an extreme-value bar in degrees.
pub const BAR_WIDTH_DEG: f64 = 22.5;

/// Where θ = 0 sits and which way θ grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolarConvention {
    pub zero_location: &'static str,
    pub direction: i8,
}

impl PolarConvention {
    pub const NORTH_CLOCKWISE: PolarConvention = PolarConvention {
        zero_location: "N",
        direction: -1,
    };
}

impl Default for PolarConvention {
    fn default() -> Self {
        Self::NORTH_CLOCKWISE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub theta: f64,
    pub radius: f64,
}

impl PolarPoint {
    pub fn new(theta: f64, radius: f64) -> Self {
        Self { theta, radius }
    }

    pub fn from_degrees(bearing_deg: f64, radius: f64) -> Self {
        Self::new(bearing_deg.to_radians(), radius)
    }

    /// Pixel position on a page with y pointing down, North up, clockwise.
    pub fn to_screen(&self, cx: f64, cy: f64, scale: f64) -> (f64, f64) {
        let r = self.radius * scale;
        (cx + r * self.theta.sin(), cy - r * self.theta.cos())
    }
}

/// A sector bar anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarBar {
    pub theta: f64,
    pub radius: f64,
    pub width: f64,
    pub bottom: f64,
}

impl PolarBar {
    /// Outline of the bar as screen points: origin, arc from θ - w/2 to θ + w/2.
    pub fn outline(&self, cx: f64, cy: f64, scale: f64, arc_steps: usize) -> Vec<(f64, f64)> {
        let steps = arc_steps.max(1);
        let start = self.theta - self.width / 2.0;

        let mut points = Vec::with_capacity(steps + 3);
        points.push(PolarPoint::new(start, self.bottom).to_screen(cx, cy, scale));
        for step in 0..=steps {
            let theta = start + self.width * step as f64 / steps as f64;
            points.push(PolarPoint::new(theta, self.radius).to_screen(cx, cy, scale));
        }
        points.push(PolarPoint::new(start + self.width, self.bottom).to_screen(cx, cy, scale));

        points
    }
}

/// The three overlaid series of a current rose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarSeries {
    pub convention: PolarConvention,
    pub scatter: Vec<PolarPoint>,
    pub bars: Vec<PolarBar>,
    pub annual_maxima: Vec<PolarPoint>,
}

impl PolarSeries {
    /// Largest radius across all series, 0 when everything is empty.
    pub fn max_radius(&self) -> f64 {
        self.scatter
            .iter()
            .map(|p| p.radius)
            .chain(self.bars.iter().map(|b| b.radius))
            .chain(self.annual_maxima.iter().map(|p| p.radius))
            .fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.scatter.is_empty() && self.bars.is_empty() && self.annual_maxima.is_empty()
    }
}

pub struct PolarCoordinateMapper {
    bar_width: f64,
}

impl PolarCoordinateMapper {
    pub fn new() -> Self {
        Self {
            bar_width: BAR_WIDTH_DEG.to_radians(),
        }
    }

    pub fn scatter(&self, readings: &[TimestampedReading]) -> Vec<PolarPoint> {
        readings
            .iter()
            .map(|r| PolarPoint::from_degrees(r.bearing_deg, r.speed))
            .collect()
    }

    pub fn bars(&self, extremes: &[ExtremeReading]) -> Vec<PolarBar> {
        extremes
            .iter()
            .map(|e| PolarBar {
                theta: e.bearing_deg.to_radians(),
                radius: e.speed,
                width: self.bar_width,
                bottom: 0.0,
            })
            .collect()
    }

    pub fn annual_maxima(&self, records: &[AnnualMaxRecord]) -> Vec<PolarPoint> {
        records
            .iter()
            .map(|r| PolarPoint::new(r.sector.radians(), r.max_speed))
            .collect()
    }

    pub fn map(
        &self,
        readings: &[TimestampedReading],
        extremes: &[ExtremeReading],
        annual_maxima: &[AnnualMaxRecord],
    ) -> PolarSeries {
        PolarSeries {
            convention: PolarConvention::NORTH_CLOCKWISE,
            scatter: self.scatter(readings),
            bars: self.bars(extremes),
            annual_maxima: self.annual_maxima(annual_maxima),
        }
    }
}

impl Default for PolarCoordinateMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompassSector;
    use chrono::NaiveDate;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    fn timestamped(speed: f64, bearing_deg: f64) -> TimestampedReading {
        TimestampedReading {
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            year: 2025,
            speed,
            bearing_deg,
            sector: CompassSector::North,
        }
    }

    #[test]
    fn test_scatter_angles() {
        let mapper = PolarCoordinateMapper::new();
        let scatter = mapper.scatter(&[timestamped(2.44, 90.0), timestamped(1.0, 301.35)]);

        assert!((scatter[0].theta - FRAC_PI_2).abs() < EPS);
        assert_eq!(scatter[0].radius, 2.44);
        assert!((scatter[1].theta - 301.35 * PI / 180.0).abs() < EPS);
    }

    #[test]
    fn test_bars() {
        let mapper = PolarCoordinateMapper::new();
        let extremes = vec![
            ExtremeReading::new(CompassSector::South, 5.59).unwrap(),
            ExtremeReading::new(CompassSector::NorthWest, 6.5).unwrap(),
        ];
        let bars = mapper.bars(&extremes);

        assert_eq!(bars.len(), 2);
        assert!((bars[0].theta - PI).abs() < EPS);
        assert_eq!(bars[0].radius, 5.59);
        assert_eq!(bars[0].bottom, 0.0);
        assert!((bars[0].width - PI / 8.0).abs() < EPS);
        assert!((bars[1].theta - 7.0 * PI / 4.0).abs() < EPS);
    }

    #[test]
    fn test_annual_maxima_use_sector_centre() {
        let mapper = PolarCoordinateMapper::new();
        let points = mapper.annual_maxima(&[AnnualMaxRecord::new(2025, CompassSector::East, 3.2)]);

        assert!((points[0].theta - FRAC_PI_2).abs() < EPS);
        assert_eq!(points[0].radius, 3.2);
    }

    #[test]
    fn test_screen_convention_north_up_clockwise() {
        let (x, y) = PolarPoint::from_degrees(0.0, 1.0).to_screen(100.0, 100.0, 50.0);
        assert!((x - 100.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);

        let (x, y) = PolarPoint::from_degrees(90.0, 1.0).to_screen(100.0, 100.0, 50.0);
        assert!((x - 150.0).abs() < 1e-9 && (y - 100.0).abs() < 1e-9);

        let (x, y) = PolarPoint::from_degrees(270.0, 1.0).to_screen(100.0, 100.0, 50.0);
        assert!((x - 50.0).abs() < 1e-9 && (y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_bar_outline_starts_and_ends_at_origin() {
        let bar = PolarBar {
            theta: 0.0,
            radius: 2.0,
            width: BAR_WIDTH_DEG.to_radians(),
            bottom: 0.0,
        };
        let outline = bar.outline(0.0, 0.0, 1.0, 4);

        assert_eq!(outline.len(), 7);
        assert_eq!(outline[0], (0.0, 0.0));
        assert_eq!(*outline.last().unwrap(), (0.0, 0.0));
        // Arc is symmetric about North.
        assert!((outline[1].0 + outline[5].0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_series() {
        let series = PolarCoordinateMapper::new().map(&[], &[], &[]);
        assert!(series.is_empty());
        assert_eq!(series.max_radius(), 0.0);
        assert_eq!(series.convention, PolarConvention::NORTH_CLOCKWISE);
    }
}
