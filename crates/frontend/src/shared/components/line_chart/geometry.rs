//! Геометрия линейного графика: шкала значений, позиции категорий, точки линии.
//!
//! Pure math, no DOM: everything here is in SVG user units.

use crate::shared::components::table::format_thousands;

/// Plot area inside the SVG viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Viewport minus the margins reserved for axis labels.
    pub fn inside(width: f64, height: f64) -> Self {
        const MARGIN_LEFT: f64 = 64.0;
        const MARGIN_RIGHT: f64 = 16.0;
        const MARGIN_TOP: f64 = 16.0;
        const MARGIN_BOTTOM: f64 = 32.0;

        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Value axis with a round step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

const TARGET_TICKS: f64 = 5.0;

/// Step from {1, 2, 5} × 10ⁿ closest above `range / TARGET_TICKS`.
pub fn nice_step(range: f64) -> f64 {
    if range <= 0.0 || !range.is_finite() {
        return 1.0;
    }
    let raw = range / TARGET_TICKS;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

impl ValueAxis {
    /// Axis covering all `values`, always including zero.
    pub fn for_values(values: &[i64]) -> Self {
        let lo = values.iter().copied().min().unwrap_or(0).min(0) as f64;
        let hi = values.iter().copied().max().unwrap_or(0).max(0) as f64;

        // flat zero series still gets a visible range
        let (lo, hi) = if hi == lo { (lo, lo + 1.0) } else { (lo, hi) };

        // values are integers, so a fractional step would only repeat labels
        let step = nice_step(hi - lo).max(1.0);
        Self {
            min: (lo / step).floor() * step,
            max: (hi / step).ceil() * step,
            step,
        }
    }

    /// Tick values from `min` to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + self.step * i as f64)
            .collect()
    }

    /// Grouped integer labels, one per tick.
    pub fn tick_labels(&self, separator: &str) -> Vec<String> {
        self.ticks()
            .into_iter()
            .map(|tick| format_thousands(tick.round() as i64, separator))
            .collect()
    }

    /// Vertical SVG coordinate of `value`.
    pub fn project(&self, value: f64, area: &PlotArea) -> f64 {
        let span = self.max - self.min;
        let ratio = if span > 0.0 {
            (value - self.min) / span
        } else {
            0.0
        };
        area.bottom() - ratio * area.height
    }
}

/// Horizontal centre of category `index` out of `count` equal bands.
pub fn category_center(index: usize, count: usize, area: &PlotArea) -> f64 {
    let band = area.width / count.max(1) as f64;
    area.left + band * (index as f64 + 0.5)
}

/// Point of the series in SVG coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub value: i64,
}

pub fn plot_points(values: &[i64], axis: &ValueAxis, area: &PlotArea) -> Vec<PlotPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| PlotPoint {
            x: category_center(i, values.len(), area),
            y: axis.project(value as f64, area),
            value,
        })
        .collect()
}

/// `points` attribute of an SVG `<polyline>`.
pub fn polyline_points(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        PlotArea {
            left: 0.0,
            top: 0.0,
            width: 700.0,
            height: 100.0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_nice_step() {
        assert_close(nice_step(500_000.0), 100_000.0);
        assert_close(nice_step(700.0), 200.0);
        assert_close(nice_step(36.0), 10.0);
        assert_close(nice_step(20.0), 5.0);
        assert_close(nice_step(0.0), 1.0);
    }

    #[test]
    fn test_axis_for_revenue_series() {
        let axis = ValueAxis::for_values(&[0, 200_000, 350_000, 450_000, 500_000, 400_000, 480_000]);
        assert_close(axis.min, 0.0);
        assert_close(axis.max, 500_000.0);
        assert_close(axis.step, 100_000.0);
        assert_eq!(axis.ticks().len(), 6);
    }

    #[test]
    fn test_axis_rounds_max_up() {
        let axis = ValueAxis::for_values(&[22, 26, 30, 32, 36, 34, 34]);
        assert_close(axis.min, 0.0);
        assert_close(axis.step, 10.0);
        assert_close(axis.max, 40.0);
    }

    #[test]
    fn test_axis_with_negative_values() {
        let axis = ValueAxis::for_values(&[-30, 10, 20]);
        assert!(axis.min <= -30.0);
        assert!(axis.max >= 20.0);
        assert!(axis.ticks().iter().any(|t| t.abs() < 1e-9));
    }

    #[test]
    fn test_small_integer_series_has_distinct_labels() {
        let axis = ValueAxis::for_values(&[0, 1, 1, 2, 2, 1, 0]);
        assert!(axis.step >= 1.0);
        let labels = axis.tick_labels(",");
        assert_eq!(labels, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_revenue_tick_labels() {
        let axis = ValueAxis::for_values(&[0, 200_000, 350_000, 450_000, 500_000, 400_000, 480_000]);
        assert_eq!(
            axis.tick_labels(","),
            vec!["0", "100,000", "200,000", "300,000", "400,000", "500,000"]
        );
    }

    #[test]
    fn test_axis_for_flat_zero_series() {
        let axis = ValueAxis::for_values(&[0; 7]);
        assert!(axis.max > axis.min);
    }

    #[test]
    fn test_projection_spans_plot_height() {
        let axis = ValueAxis {
            min: 0.0,
            max: 500.0,
            step: 100.0,
        };
        assert_eq!(axis.project(0.0, &area()), 100.0);
        assert_eq!(axis.project(500.0, &area()), 0.0);
        assert_eq!(axis.project(250.0, &area()), 50.0);
    }

    #[test]
    fn test_points_sit_in_category_centers() {
        let values = [0, 1, 2, 3, 4, 5, 6];
        let axis = ValueAxis::for_values(&values);
        let points = plot_points(&values, &axis, &area());
        assert_eq!(points.len(), 7);
        assert_close(points[0].x, 50.0);
        assert_close(points[6].x, 650.0);
        assert!(points.windows(2).all(|w| w[0].y > w[1].y));
    }

    #[test]
    fn test_polyline_points() {
        let points = [
            PlotPoint { x: 1.0, y: 2.0, value: 0 },
            PlotPoint { x: 3.5, y: 4.0, value: 0 },
        ];
        assert_eq!(polyline_points(&points), "1.0,2.0 3.5,4.0");
    }
}
