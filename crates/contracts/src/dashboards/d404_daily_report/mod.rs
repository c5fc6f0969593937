//! Daily report: one row per business metric with today / yesterday /
//! same-weekday values and a weekly series for the inline chart.

pub mod dataset;
pub mod dto;
pub mod error;
pub mod tone;

pub use dataset::{builtin_rows, StatDataset};
pub use dto::{StatRow, CHART_POINTS};
pub use error::DatasetError;
pub use tone::CellTone;
