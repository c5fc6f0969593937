//! Компонент ячейки таблицы с цветовой индикацией сравнения
//!
//! # Примеры
//!
//! ```rust,ignore
//! <TableCellTone tone=row.week_tone() label="Этот день недели">
//!     {format_thousands(row.week, ",")}
//! </TableCellTone>
//! ```

use contracts::dashboards::d404_daily_report::CellTone;
use leptos::prelude::*;
use thaw::*;

/// Ячейка таблицы, окрашенная по результату сравнения:
/// рост - зеленый, снижение - красный, без изменений - серый
#[component]
pub fn TableCellTone(
    /// Результат сравнения
    tone: CellTone,

    /// Заголовок колонки (для мобильной раскладки через `data-label`)
    #[prop(optional)]
    label: &'static str,

    children: Children,
) -> impl IntoView {
    view! {
        <TableCell class=tone.css_class() attr:data-label=label>
            <TableCellLayout>
                {children()}
            </TableCellLayout>
        </TableCell>
    }
}
