pub mod dashboard;
pub mod stat_chart;
pub mod state;
pub mod stats_table;

pub use dashboard::DailyReportDashboard;
