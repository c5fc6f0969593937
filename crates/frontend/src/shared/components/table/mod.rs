pub mod number_format;
pub mod table_cell_tone;

pub use number_format::*;
pub use table_cell_tone::TableCellTone;
