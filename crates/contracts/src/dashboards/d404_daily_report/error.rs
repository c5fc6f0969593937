use super::dto::CHART_POINTS;
use thiserror::Error;

/// Ошибки загрузки набора показателей
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("duplicate row title: {0}")]
    DuplicateTitle(String),

    #[error("row #{index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("chart of '{title}' has {len} points, expected {expected}", expected = CHART_POINTS)]
    ChartLength { title: String, len: usize },

    #[error("invalid dataset json: {0}")]
    Json(#[from] serde_json::Error),
}
