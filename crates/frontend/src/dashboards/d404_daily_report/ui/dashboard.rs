use super::state::create_state;
use super::stats_table::StatsTable;
use crate::shared::config::Config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d404_daily_report::StatDataset;
use leptos::prelude::*;

/// Daily report dashboard: owns the selection and renders the stats table.
#[component]
pub fn DailyReportDashboard() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let state = create_state();

    let dataset = StatDataset::builtin();
    match &dataset {
        Ok(ds) => log::info!("d404: daily report mounted with {} rows", ds.len()),
        Err(err) => log::error!("d404: failed to load dataset: {}", err),
    }

    view! {
        <PageFrame entity="d404_daily_report" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2 class="page__title">{config.report.title}</h2>
            </div>
            <div class="page__content">
                {match dataset {
                    Ok(ds) => view! {
                        <StatsTable rows=ds.rows().to_vec() state=state />
                    }
                    .into_any(),
                    Err(err) => view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{format!("Ошибка: {}", err)}</span>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}
