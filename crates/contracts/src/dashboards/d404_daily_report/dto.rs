use super::tone::CellTone;
use serde::{Deserialize, Serialize};

/// Number of points in a weekly chart series (Monday through Sunday).
pub const CHART_POINTS: usize = 7;

/// Single metric row of the daily report.
///
/// `title` doubles as the row identity; a dataset never holds two rows with
/// the same title (see [`super::StatDataset`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRow {
    /// Display name, e.g. "Выручка, руб"
    pub title: String,
    /// Value for today
    pub current: i64,
    /// Value for yesterday
    pub previous: i64,
    /// Stored percentage change; not recomputed from `current` / `previous`
    pub delta: i32,
    /// Value for the same weekday, historically
    pub week: i64,
    /// One value per weekday, Monday first
    pub chart: [i64; CHART_POINTS],
}

impl StatRow {
    /// Tone of the "yesterday" cell, driven by the sign of `delta`.
    pub fn previous_tone(&self) -> CellTone {
        CellTone::from_sign(self.delta.signum())
    }

    /// Tone of the "same weekday" cell: `week` compared against `previous`.
    pub fn week_tone(&self) -> CellTone {
        CellTone::from_ordering(self.week.cmp(&self.previous))
    }
}
