pub mod d404_daily_report;

pub use d404_daily_report::ui::DailyReportDashboard;
