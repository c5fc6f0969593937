use super::dto::{StatRow, CHART_POINTS};
use super::error::DatasetError;
use serde::Deserialize;
use std::collections::HashSet;

/// Validated, immutable set of report rows.
///
/// Order is preserved as given; titles are unique and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatDataset {
    rows: Vec<StatRow>,
}

/// Row as it arrives from JSON: the chart is a plain list and gets
/// length-checked before it becomes a `[i64; 7]`.
#[derive(Debug, Deserialize)]
struct RawStatRow {
    title: String,
    current: i64,
    previous: i64,
    delta: i32,
    week: i64,
    chart: Vec<i64>,
}

impl TryFrom<RawStatRow> for StatRow {
    type Error = DatasetError;

    fn try_from(raw: RawStatRow) -> Result<Self, Self::Error> {
        let len = raw.chart.len();
        let chart: [i64; CHART_POINTS] = raw.chart.try_into().map_err(|_| DatasetError::ChartLength {
            title: raw.title.clone(),
            len,
        })?;

        Ok(StatRow {
            title: raw.title,
            current: raw.current,
            previous: raw.previous,
            delta: raw.delta,
            week: raw.week,
            chart,
        })
    }
}

impl StatDataset {
    pub fn from_rows(rows: Vec<StatRow>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            if row.title.trim().is_empty() {
                return Err(DatasetError::EmptyTitle { index });
            }
            if !seen.insert(row.title.as_str()) {
                return Err(DatasetError::DuplicateTitle(row.title.clone()));
            }
        }
        Ok(Self { rows })
    }

    /// Parse a JSON array of rows.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: Vec<RawStatRow> = serde_json::from_str(json)?;
        let rows = raw
            .into_iter()
            .map(StatRow::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    /// The dataset shipped with the dashboard.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_rows(builtin_rows())
    }

    pub fn rows(&self) -> &[StatRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatRow> {
        self.rows.iter()
    }

    pub fn find(&self, title: &str) -> Option<&StatRow> {
        self.rows.iter().find(|r| r.title == title)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a StatDataset {
    type Item = &'a StatRow;
    type IntoIter = std::slice::Iter<'a, StatRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn row(
    title: &str,
    current: i64,
    previous: i64,
    delta: i32,
    week: i64,
    chart: [i64; CHART_POINTS],
) -> StatRow {
    StatRow {
        title: title.to_string(),
        current,
        previous,
        delta,
        week,
        chart,
    }
}

/// Hardcoded report rows, in display order.
///
/// `delta` values are stored as reported and may not match
/// `current` / `previous` arithmetically.
pub fn builtin_rows() -> Vec<StatRow> {
    vec![
        row(
            "Выручка, руб",
            500_521,
            480_521,
            4,
            4_805_121,
            [0, 200_000, 350_000, 450_000, 500_000, 400_000, 480_000],
        ),
        row(
            "Наличные",
            300_000,
            300_000,
            0,
            300_000,
            [0, 150_000, 180_000, 250_000, 300_000, 280_000, 300_000],
        ),
        row(
            "Безналичный расчет",
            100_000,
            100_000,
            0,
            100_000,
            [0, 90_000, 95_000, 100_000, 100_000, 100_000, 100_000],
        ),
        row(
            "Кредитные карты",
            100_521,
            100_521,
            0,
            100_521,
            [0, 80_000, 90_000, 100_000, 100_521, 99_000, 100_000],
        ),
        row(
            "Средний чек, руб",
            1300,
            900,
            44,
            900,
            [600, 800, 1000, 1100, 900, 1200, 1300],
        ),
        row(
            "Средний гость, руб",
            1200,
            800,
            50,
            800,
            [500, 700, 800, 900, 1000, 1100, 1200],
        ),
        row(
            "Удаления из чека (после оплаты), руб",
            1000,
            1100,
            -9,
            900,
            [500, 800, 900, 1000, 1100, 1000, 1000],
        ),
        row(
            "Удаления из чека (до оплаты), руб",
            1300,
            1300,
            0,
            900,
            [700, 800, 900, 1200, 1300, 1100, 1300],
        ),
        row(
            "Количество чеков",
            34,
            36,
            -6,
            34,
            [20, 25, 30, 32, 36, 34, 34],
        ),
        row(
            "Количество гостей",
            34,
            36,
            -6,
            32,
            [22, 26, 30, 32, 36, 34, 34],
        ),
    ]
}
