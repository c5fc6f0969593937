use crate::shared::components::line_chart::LineChart;
use crate::shared::config::Config;
use contracts::dashboards::d404_daily_report::CHART_POINTS;
use contracts::shared::weekdays::weekday_labels;
use leptos::prelude::*;

/// Weekly chart of one report row, Monday to Sunday.
#[component]
pub fn StatChart(title: String, data: [i64; CHART_POINTS]) -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();

    view! {
        <div class="stat-chart">
            <LineChart
                title=title.clone()
                series_name=title
                categories=weekday_labels().to_vec()
                values=data.to_vec()
                color=config.chart.color
                width=config.chart.width
                height=config.chart.height
                separator=config.format.thousands_separator
            />
        </div>
    }
}
