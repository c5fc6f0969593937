pub mod line_chart;
pub mod table;
