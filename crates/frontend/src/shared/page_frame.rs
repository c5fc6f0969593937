//! PageFrame — standard root wrapper for a page.
//!
//! Puts two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on a page.
///
/// Adds the BEM modifier class based on category:
/// - `dashboard` → `page page--dashboard`
/// - anything else → `page`
#[component]
pub fn PageFrame(
    /// Entity directory name, e.g. `"d404_daily_report"`.
    entity: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div
            id=page_id(entity, category)
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
