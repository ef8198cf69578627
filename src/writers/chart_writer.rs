use crate::error::{ProcessingError, Result};
use crate::models::CompassSector;
use crate::processors::{PolarPoint, PolarSeries};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

pub const DEFAULT_CHART_SIZE: u32 = 720;
pub const MIN_CHART_SIZE: u32 = 200;
pub const MAX_CHART_SIZE: u32 = 16384;

const LEGEND_HEIGHT: u32 = 60;
const LABEL_MARGIN: f64 = 50.0;
const RING_COUNT: usize = 4;
const BAR_ARC_STEPS: usize = 16;

const SCATTER_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(200, 200, 200);
const MAXIMA_COLOR: RGBColor = RGBColor(255, 165, 0);

fn render_error<E: std::fmt::Display>(e: E) -> ProcessingError {
    ProcessingError::Render(e.to_string())
}

/// Smallest "round" value (1, 2, 2.5, 5 × 10^n) not below `value`.
pub fn nice_ceiling(value: f64) -> f64 {
    if !(value > 0.0) {
        return 1.0;
    }

    let magnitude = 10f64.powf(value.log10().floor());
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}

fn pixel((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

/// Renders a current rose as SVG, North up and bearings clockwise.
pub struct ChartWriter {
    size: u32,
    title: Option<String>,
}

impl ChartWriter {
    pub fn new() -> Self {
        Self {
            size: DEFAULT_CHART_SIZE,
            title: None,
        }
    }

    pub fn with_size(mut self, size: u32) -> Result<Self> {
        if !(MIN_CHART_SIZE..=MAX_CHART_SIZE).contains(&size) {
            return Err(ProcessingError::InvalidFormat(format!(
                "Chart size {} is outside {}..={}",
                size, MIN_CHART_SIZE, MAX_CHART_SIZE
            )));
        }
        self.size = size;
        Ok(self)
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn write_chart(&self, series: &PolarSeries, path: &Path) -> Result<()> {
        std::fs::write(path, self.render_svg(series)?)?;
        Ok(())
    }

    pub fn render_svg(&self, series: &PolarSeries) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.size, self.size + LEGEND_HEIGHT))
                .into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;
            self.draw_rose(&root, series)?;
            root.present().map_err(render_error)?;
        }
        Ok(svg)
    }

    fn draw_rose(&self, root: &DrawingArea<SVGBackend<'_>, Shift>, series: &PolarSeries) -> Result<()> {
        let cx = self.size as f64 / 2.0;
        let cy = self.size as f64 / 2.0;
        let radius_px = cx - LABEL_MARGIN;
        let outer = nice_ceiling(series.max_radius());
        let scale = radius_px / outer;

        let label_font = ("sans-serif", 14).into_font();
        let centered = TextStyle::from(label_font.clone()).pos(Pos::new(HPos::Center, VPos::Center));

        // Speed rings
        for ring in 1..=RING_COUNT {
            let value = outer * ring as f64 / RING_COUNT as f64;
            let r = (value * scale).round() as i32;
            root.draw(&Circle::new(pixel((cx, cy)), r, GRID_COLOR.stroke_width(1)))
                .map_err(render_error)?;
            root.draw(&Text::new(
                format!("{}", value),
                pixel(PolarPoint::from_degrees(22.5, value).to_screen(cx, cy, scale)),
                ("sans-serif", 11).into_font().color(&BLACK.mix(0.6)),
            ))
            .map_err(render_error)?;
        }

        // Compass spokes
        for sector in CompassSector::ALL {
            let tip = PolarPoint::new(sector.radians(), outer).to_screen(cx, cy, scale);
            root.draw(&PathElement::new(
                vec![pixel((cx, cy)), pixel(tip)],
                GRID_COLOR.stroke_width(1),
            ))
            .map_err(render_error)?;

            let label = PolarPoint::new(sector.radians(), radius_px + 20.0).to_screen(cx, cy, 1.0);
            root.draw(&Text::new(sector.label(), pixel(label), centered.clone()))
                .map_err(render_error)?;
        }

        for point in &series.scatter {
            root.draw(&Circle::new(
                pixel(point.to_screen(cx, cy, scale)),
                2,
                SCATTER_COLOR.mix(0.5).filled(),
            ))
            .map_err(render_error)?;
        }

        for bar in &series.bars {
            let mut outline: Vec<(i32, i32)> = bar
                .outline(cx, cy, scale, BAR_ARC_STEPS)
                .into_iter()
                .map(pixel)
                .collect();
            if let Some(first) = outline.first().copied() {
                outline.push(first);
            }
            root.draw(&PathElement::new(outline, RED.stroke_width(2)))
                .map_err(render_error)?;
        }

        for point in &series.annual_maxima {
            let center = pixel(point.to_screen(cx, cy, scale));
            root.draw(&Circle::new(center, 5, MAXIMA_COLOR.filled()))
                .map_err(render_error)?;
            root.draw(&Circle::new(center, 5, BLACK.stroke_width(1)))
                .map_err(render_error)?;
        }

        if let Some(title) = &self.title {
            root.draw(&Text::new(title.as_str(), (10, 20), ("sans-serif", 16).into_font()))
                .map_err(render_error)?;
        }

        self.draw_legend(root, label_font)
    }

    fn draw_legend(&self, root: &DrawingArea<SVGBackend<'_>, Shift>, font: FontDesc<'_>) -> Result<()> {
        let y = (self.size + LEGEND_HEIGHT / 2) as i32;
        let column = self.size as i32 / 3;
        let label_style = TextStyle::from(font).pos(Pos::new(HPos::Left, VPos::Center));

        let x = 20;
        root.draw(&Circle::new((x, y), 4, SCATTER_COLOR.mix(0.5).filled()))
            .map_err(render_error)?;
        root.draw(&Text::new("Current Data", (x + 12, y), label_style.clone()))
            .map_err(render_error)?;

        let x = column;
        root.draw(&Rectangle::new([(x - 6, y - 6), (x + 6, y + 6)], RED.stroke_width(2)))
            .map_err(render_error)?;
        root.draw(&Text::new("Extreme (Design Current)", (x + 12, y), label_style.clone()))
            .map_err(render_error)?;

        let x = 2 * column + 20;
        root.draw(&Circle::new((x, y), 5, MAXIMA_COLOR.filled()))
            .map_err(render_error)?;
        root.draw(&Circle::new((x, y), 5, BLACK.stroke_width(1)))
            .map_err(render_error)?;
        root.draw(&Text::new("Annual Maxima", (x + 12, y), label_style))
            .map_err(render_error)?;

        Ok(())
    }
}

impl Default for ChartWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::{generate_rose, RoseInput, StepInterval};
    use tempfile::TempDir;

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(7.52), 10.0);
        assert_eq!(nice_ceiling(4.2), 5.0);
        assert_eq!(nice_ceiling(2.2), 2.5);
        assert!((nice_ceiling(0.18) - 0.2).abs() < 1e-12);
        assert_eq!(nice_ceiling(3.0), 5.0);
        assert_eq!(nice_ceiling(2.0), 2.0);
    }

    #[test]
    fn test_render_svg() -> Result<()> {
        let input = RoseInput::new("01-01-2025 00:00", StepInterval::hourly())
            .with_current_text("2.44\t301.35\n2.61\t303.69\n2.59\t291.55")
            .with_extreme_text("N\t3.93\nW\t7.52");
        let output = generate_rose(&input)?;

        let svg = ChartWriter::new()
            .with_title(Some("Test Rose".to_string()))
            .render_svg(&output.series)?;

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Annual Maxima"));
        assert!(svg.contains("Extreme (Design Current)"));
        assert!(svg.contains("Test Rose"));
        for sector in CompassSector::ALL {
            assert!(
                svg.lines().any(|line| line.trim() == sector.label()),
                "missing spoke label {}",
                sector
            );
        }

        Ok(())
    }

    #[test]
    fn test_empty_rose_renders() -> Result<()> {
        let output = generate_rose(&RoseInput::new("01-01-2025 00:00", StepInterval::zero()))?;
        let dir = TempDir::new()?;
        let path = dir.path().join("rose.svg");

        ChartWriter::new().with_size(300)?.write_chart(&output.series, &path)?;

        assert!(std::fs::metadata(&path)?.len() > 0);
        Ok(())
    }

    #[test]
    fn test_chart_size_bounds() -> Result<()> {
        assert!(ChartWriter::new().with_size(50).is_err());
        assert!(ChartWriter::new().with_size(MAX_CHART_SIZE + 1).is_err());
        assert!(matches!(
            ChartWriter::new().with_size(u32::MAX),
            Err(ProcessingError::InvalidFormat(_))
        ));

        let output = generate_rose(&RoseInput::new("01-01-2025 00:00", StepInterval::zero()))?;
        let svg = ChartWriter::new()
            .with_size(MAX_CHART_SIZE)?
            .render_svg(&output.series)?;
        assert!(svg.contains("<svg"));

        Ok(())
    }
}
