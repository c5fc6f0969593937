use super::stat_chart::StatChart;
use super::state::{table_lines, DailyReportState, TableLine};
use crate::shared::components::table::{format_delta_percent, format_thousands, TableCellTone};
use crate::shared::config::Config;
use contracts::dashboards::d404_daily_report::{CellTone, StatRow};
use leptos::prelude::*;
use thaw::*;

const COL_TITLE: &str = "Показатель";
const COL_CURRENT: &str = "Текущий день";
const COL_PREVIOUS: &str = "Вчера";
const COL_WEEK: &str = "Этот день недели";
const COL_COUNT: usize = 4;

/// Display text and tones of one stat row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCells {
    pub title: String,
    pub current: String,
    pub previous: String,
    pub delta: String,
    pub week: String,
    pub previous_tone: CellTone,
    pub week_tone: CellTone,
}

impl StatCells {
    pub fn new(row: &StatRow, separator: &str) -> Self {
        Self {
            title: row.title.clone(),
            current: format_thousands(row.current, separator),
            previous: format_thousands(row.previous, separator),
            delta: format_delta_percent(row.delta),
            week: format_thousands(row.week, separator),
            previous_tone: row.previous_tone(),
            week_tone: row.week_tone(),
        }
    }
}

#[component]
pub fn StatsTable(
    /// Rows in display order
    rows: Vec<StatRow>,
    state: RwSignal<DailyReportState>,
) -> impl IntoView {
    let separator = use_context::<Config>()
        .unwrap_or_default()
        .format
        .thousands_separator;
    let rows = StoredValue::new(rows);
    let separator = StoredValue::new(separator);

    let on_row_click = move |title: String| {
        state.update(|s| s.toggle(&title));
        match state.with_untracked(|s| s.selected.clone()) {
            Some(t) => log::debug!("d404: selected '{}'", t),
            None => log::debug!("d404: selection cleared"),
        }
    };

    view! {
        <div class="stats-table" style="width: 100%; overflow-x: auto;">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell class="gray-cell">{COL_TITLE}</TableHeaderCell>
                        <TableHeaderCell class="gray-cell">{COL_CURRENT}</TableHeaderCell>
                        <TableHeaderCell>{COL_PREVIOUS}</TableHeaderCell>
                        <TableHeaderCell>{COL_WEEK}</TableHeaderCell>
                    </TableRow>
                </TableHeader>

                <TableBody>
                    {move || {
                        let st = state.get();
                        let sep = separator.get_value();
                        rows.with_value(|rows| {
                            table_lines(rows, &st)
                                .into_iter()
                                .map(|line| match line {
                                    TableLine::Stat { row, selected } => {
                                        let click_title = row.title.clone();
                                        let cells = StatCells::new(row, &sep);
                                        view! {
                                            <TableRow
                                                class:selected=selected
                                                on:click=move |_| on_row_click(click_title.clone())
                                                attr:style="cursor: pointer;"
                                            >
                                                <TableCell class="gray-cell" attr:data-label=COL_TITLE>
                                                    <TableCellLayout>{cells.title}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="gray-cell" attr:data-label=COL_CURRENT>
                                                    <TableCellLayout>{cells.current}</TableCellLayout>
                                                </TableCell>
                                                <TableCellTone tone=cells.previous_tone label=COL_PREVIOUS>
                                                    <span class="value">{cells.previous}</span>
                                                    " "
                                                    <span class="percent">{cells.delta}</span>
                                                </TableCellTone>
                                                <TableCellTone tone=cells.week_tone label=COL_WEEK>
                                                    {cells.week}
                                                </TableCellTone>
                                            </TableRow>
                                        }
                                        .into_any()
                                    }
                                    TableLine::Detail(row) => {
                                        let title = row.title.clone();
                                        let chart = row.chart;
                                        view! {
                                            <TableRow class="stats-table__detail">
                                                <TableCell attr:colspan=COL_COUNT.to_string()>
                                                    <StatChart title=title data=chart />
                                                </TableCell>
                                            </TableRow>
                                        }
                                        .into_any()
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
