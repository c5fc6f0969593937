use contracts::dashboards::d404_daily_report::StatRow;
use leptos::prelude::*;

/// Which row, if any, is expanded. Only one title is tracked, so at most one
/// detail row can be open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DailyReportState {
    pub selected: Option<String>,
}

impl DailyReportState {
    pub fn is_selected(&self, title: &str) -> bool {
        self.selected.as_deref() == Some(title)
    }

    /// Collapse the row if it is the selected one, otherwise select it.
    pub fn toggle(&mut self, title: &str) {
        if self.is_selected(title) {
            self.selected = None;
        } else {
            self.selected = Some(title.to_string());
        }
    }
}

/// One `<tr>` of the report table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableLine<'a> {
    Stat { row: &'a StatRow, selected: bool },
    /// Chart row right after the selected stat row
    Detail(&'a StatRow),
}

/// Lays out the table body: a line per row, and a detail line directly
/// after the selected one.
pub fn table_lines<'a>(rows: &'a [StatRow], state: &DailyReportState) -> Vec<TableLine<'a>> {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    for row in rows {
        let selected = state.is_selected(&row.title);
        lines.push(TableLine::Stat { row, selected });
        if selected {
            lines.push(TableLine::Detail(row));
        }
    }
    lines
}

pub fn create_state() -> RwSignal<DailyReportState> {
    RwSignal::new(DailyReportState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d404_daily_report::builtin_rows;

    fn details<'a>(lines: &[TableLine<'a>]) -> Vec<(usize, &'a str)> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(i, l)| match *l {
                TableLine::Detail(row) => Some((i, row.title.as_str())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_nothing_selected_renders_no_chart() {
        let rows = builtin_rows();
        let lines = table_lines(&rows, &DailyReportState::default());
        assert_eq!(lines.len(), rows.len());
        assert!(details(&lines).is_empty());
    }

    #[test]
    fn test_select_renders_one_chart_below_row() {
        let rows = builtin_rows();
        let mut state = DailyReportState::default();
        state.toggle("Средний чек, руб");

        let lines = table_lines(&rows, &state);
        assert_eq!(lines.len(), rows.len() + 1);

        let found = details(&lines);
        assert_eq!(found.len(), 1);
        let (idx, title) = found[0];
        assert_eq!(title, "Средний чек, руб");
        match &lines[idx - 1] {
            TableLine::Stat { row, selected } => {
                assert_eq!(row.title, "Средний чек, руб");
                assert!(*selected);
            }
            other => panic!("unexpected line before detail: {:?}", other),
        }
        match &lines[idx] {
            TableLine::Detail(row) => {
                assert_eq!(row.chart, [600, 800, 1000, 1100, 900, 1200, 1300]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_toggle_same_row_collapses() {
        let rows = builtin_rows();
        let mut state = DailyReportState::default();
        state.toggle("Наличные");
        state.toggle("Наличные");

        assert_eq!(state.selected, None);
        assert!(details(&table_lines(&rows, &state)).is_empty());
    }

    #[test]
    fn test_select_other_row_moves_chart() {
        let rows = builtin_rows();
        let mut state = DailyReportState::default();
        state.toggle("Наличные");
        state.toggle("Количество гостей");

        assert!(!state.is_selected("Наличные"));
        let found = details(&table_lines(&rows, &state));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1, "Количество гостей");
        // last row: chart is the very last line
        assert_eq!(found[0].0, rows.len());
    }

    #[test]
    fn test_selected_flag_only_on_selected_row() {
        let rows = builtin_rows();
        let mut state = DailyReportState::default();
        state.toggle("Выручка, руб");

        let flagged: Vec<_> = table_lines(&rows, &state)
            .into_iter()
            .filter_map(|l| match l {
                TableLine::Stat { row, selected: true } => Some(row.title.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(flagged, vec!["Выручка, руб".to_string()]);
    }
}
