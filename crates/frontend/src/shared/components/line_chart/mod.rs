//! Линейный график на SVG с категориальной осью X
//!
//! ```rust,ignore
//! <LineChart
//!     title="Выручка, руб".to_string()
//!     series_name="Выручка, руб".to_string()
//!     categories=weekday_labels().to_vec()
//!     values=row.chart.to_vec()
//!     color="green".to_string()
//! />
//! ```

pub mod geometry;

use super::table::format_thousands;
use geometry::{category_center, plot_points, polyline_points, PlotArea, ValueAxis};
use leptos::prelude::*;

fn coord(v: f64) -> String {
    format!("{:.1}", v)
}

/// Single-series line chart. The value axis has no title.
#[component]
pub fn LineChart(
    /// Chart heading
    title: String,
    /// Legend entry and tooltip prefix
    series_name: String,
    /// Labels of the horizontal axis, one per value
    categories: Vec<&'static str>,
    values: Vec<i64>,
    /// Line and marker colour
    color: String,
    #[prop(optional, default = 640)] width: u32,
    #[prop(optional, default = 280)] height: u32,
    /// Thousands separator for tick labels
    #[prop(optional, default = ",".to_string())]
    separator: String,
) -> impl IntoView {
    let area = PlotArea::inside(width as f64, height as f64);
    let axis = ValueAxis::for_values(&values);
    let points = plot_points(&values, &axis, &area);
    let line_points = polyline_points(&points);

    let grid = axis
        .ticks()
        .into_iter()
        .zip(axis.tick_labels(&separator))
        .map(|(tick, label)| {
            let y = axis.project(tick, &area);
            view! {
                <line
                    class="line-chart__grid"
                    x1=coord(area.left)
                    x2=coord(area.right())
                    y1=coord(y)
                    y2=coord(y)
                />
                <text class="line-chart__tick" x=coord(area.left - 8.0) y=coord(y + 4.0) text-anchor="end">
                    {label}
                </text>
            }
        })
        .collect_view();

    let category_labels = categories
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = category_center(i, categories.len(), &area);
            view! {
                <text class="line-chart__category" x=coord(x) y=coord(area.bottom() + 20.0) text-anchor="middle">
                    {*label}
                </text>
            }
        })
        .collect_view();

    let markers = points
        .iter()
        .zip(categories.iter())
        .map(|(p, label)| {
            let tooltip = format!(
                "{}\n{}: {}",
                label,
                series_name,
                format_thousands(p.value, &separator)
            );
            view! {
                <circle class="line-chart__marker" cx=coord(p.x) cy=coord(p.y) r="4" fill=color.clone()>
                    <title>{tooltip}</title>
                </circle>
            }
        })
        .collect_view();

    let view_box = format!("0 0 {} {}", width, height);

    view! {
        <div class="line-chart">
            <div class="line-chart__title">{title}</div>
            <svg
                class="line-chart__svg"
                viewBox=view_box
                width="100%"
                preserveAspectRatio="xMidYMid meet"
                role="img"
            >
                {grid}
                <line
                    class="line-chart__axis"
                    x1=coord(area.left)
                    x2=coord(area.right())
                    y1=coord(area.bottom())
                    y2=coord(area.bottom())
                />
                {category_labels}
                <polyline
                    class="line-chart__line"
                    points=line_points
                    fill="none"
                    stroke=color.clone()
                    stroke-width="2"
                />
                {markers}
            </svg>
            <div class="line-chart__legend">
                <span class="line-chart__legend-swatch" style=format!("background: {};", color)></span>
                <span>{series_name.clone()}</span>
            </div>
        </div>
    }
}
