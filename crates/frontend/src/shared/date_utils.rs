/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Local, Utc};

/// Format a timestamp in the browser's local time as DD/MM/YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024 09:02" (UTC-5)
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// "hace 5 min" style age of an order, used on the pending board
pub fn elapsed_label(from: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let minutes = (*now - *from).num_minutes().max(0);
    match minutes {
        0 => "hace un momento".to_string(),
        1..=59 => format!("hace {} min", minutes),
        60..=1439 => format!("hace {} h {} min", minutes / 60, minutes % 60),
        _ => format!("hace {} días", minutes / 1440),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_elapsed_label() {
        let from: DateTime<Utc> = "2024-03-15T08:00:00Z".parse().unwrap();
        let at = |s: &str| s.parse::<DateTime<Utc>>().unwrap();
        assert_eq!(elapsed_label(&from, &at("2024-03-15T08:00:30Z")), "hace un momento");
        assert_eq!(elapsed_label(&from, &at("2024-03-15T08:42:00Z")), "hace 42 min");
        assert_eq!(elapsed_label(&from, &at("2024-03-15T10:05:00Z")), "hace 2 h 5 min");
        assert_eq!(elapsed_label(&from, &at("2024-03-17T08:00:00Z")), "hace 2 días");
    }
}
