//! Подписи дней недели для графиков

use chrono::Weekday;

/// Monday through Sunday, the order of every weekly series.
pub fn week_days() -> [Weekday; 7] {
    std::array::from_fn(|i| (0..i).fold(Weekday::Mon, |day, _| day.succ()))
}

/// Short Russian label for a weekday.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Пн",
        Weekday::Tue => "Вт",
        Weekday::Wed => "Ср",
        Weekday::Thu => "Чт",
        Weekday::Fri => "Пт",
        Weekday::Sat => "Сб",
        Weekday::Sun => "Вс",
    }
}

/// Category labels for the horizontal axis of a weekly chart.
pub fn weekday_labels() -> [&'static str; 7] {
    week_days().map(weekday_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_starts_on_monday() {
        let days = week_days();
        assert_eq!(days[0], Weekday::Mon);
        assert_eq!(days[6], Weekday::Sun);
    }

    #[test]
    fn test_week_days_follow_each_other() {
        let days = week_days();
        for pair in days.windows(2) {
            assert_eq!(pair[1], pair[0].succ());
        }
        assert_eq!(days[6].succ(), days[0]);
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(
            weekday_labels(),
            ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"]
        );
    }
}
