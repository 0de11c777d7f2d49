/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDate, Utc};

/// Format a date as DD-MM-YYYY
/// Example: 2024-03-15 -> "15-03-2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Format a UTC timestamp as DD-MM-YYYY HH:MM
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.format("%d-%m-%Y %H:%M").to_string()
}

/// Optional date, with a dash placeholder for missing values
pub fn format_optional_date(date: Option<&NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(&date), "15-03-2024");
        assert_eq!(format_optional_date(Some(&date)), "15-03-2024");
        assert_eq!(format_optional_date(None), "—");
    }

    #[test]
    fn test_format_datetime() {
        let datetime = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_datetime(&datetime), "31-12-2024 23:59");
    }
}
