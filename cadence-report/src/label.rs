//! Hebrew date labels. A thin render helper, swappable without touching
//! the report math.

use chrono::{Datelike, NaiveDate};

const HEBREW_MONTHS: [&str; 12] = [
    "ינואר",
    "פברואר",
    "מרץ",
    "אפריל",
    "מאי",
    "יוני",
    "יולי",
    "אוגוסט",
    "ספטמבר",
    "אוקטובר",
    "נובמבר",
    "דצמבר",
];

/// "ינואר 2026" for (1, 2026); out-of-range months fall back to "1/2026".
pub fn month_label(month: u32, year: i32) -> String {
    match HEBREW_MONTHS.get(month.wrapping_sub(1) as usize) {
        Some(name) => format!("{name} {year}"),
        None => format!("{month}/{year}"),
    }
}

/// "15 בינואר 2026" style full-date label.
pub fn format_date_hebrew(date: NaiveDate) -> String {
    let name = HEBREW_MONTHS[date.month0() as usize];
    format!("{} ב{} {}", date.day(), name, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(1, 2026), "ינואר 2026");
        assert_eq!(month_label(12, 2025), "דצמבר 2025");
        assert_eq!(month_label(0, 2026), "0/2026");
        assert_eq!(month_label(13, 2026), "13/2026");
    }

    #[test]
    fn test_format_date_hebrew() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(format_date_hebrew(date), "15 בינואר 2026");
    }
}
