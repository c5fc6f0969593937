use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Colour classification of a comparison cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellTone {
    /// Growth, rendered green
    Positive,
    /// Decline, rendered red
    Negative,
    /// No change, rendered gray
    Neutral,
}

impl CellTone {
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => CellTone::Positive,
            Ordering::Less => CellTone::Negative,
            Ordering::Equal => CellTone::Neutral,
        }
    }

    /// Accepts the result of `signum()`.
    pub fn from_sign(sign: i32) -> Self {
        Self::from_ordering(sign.cmp(&0))
    }

    /// CSS class used by the report table.
    pub fn css_class(&self) -> &'static str {
        match self {
            CellTone::Positive => "delta-green",
            CellTone::Negative => "delta-red",
            CellTone::Neutral => "delta-gray",
        }
    }
}
