pub mod d404_daily_report;
