//! Утилиты форматирования чисел для таблиц

/// Форматирует целое число с разделителем тысяч
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_thousands;
/// assert_eq!(format_thousands(4805121, ","), "4,805,121");
/// ```
pub fn format_thousands(value: i64, separator: &str) -> String {
    let digits = value.unsigned_abs().to_string();

    // Вставляем разделитель каждые 3 цифры с конца
    let mut groups: Vec<&str> = Vec::with_capacity(digits.len() / 3 + 1);
    let head = digits.len() % 3;
    if head > 0 {
        groups.push(&digits[..head]);
    }
    for start in (head..digits.len()).step_by(3) {
        groups.push(&digits[start..start + 3]);
    }

    let grouped = groups.join(separator);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Форматирует изменение в процентах: знак "+" только для положительных
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_delta_percent;
/// assert_eq!(format_delta_percent(50), "+50%");
/// assert_eq!(format_delta_percent(-9), "-9%");
/// ```
pub fn format_delta_percent(delta: i32) -> String {
    if delta > 0 {
        format!("+{}%", delta)
    } else {
        format!("{}%", delta)
    }
}
