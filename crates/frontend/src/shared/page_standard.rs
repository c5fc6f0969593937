//! Page category constants.
//!
//! Every page root declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"d404_daily_report--dashboard"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from
//! the DOM inspector and it lands you in `dashboards/d404_daily_report/`.

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Builds the page id from the entity directory name and category.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}
