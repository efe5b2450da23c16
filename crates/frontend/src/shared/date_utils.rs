/// Utilities for date and time formatting
///
/// Dates are shown the way `toLocaleDateString("ja-JP")` renders them.
use chrono::{DateTime, Utc};

pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y/%m/%d %H:%M:%S").to_string()
}

pub fn format_day(dt: DateTime<Utc>) -> String {
    dt.format("%Y/%m/%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(format_timestamp(dt), "2024/03/05 07:08:09");
        assert_eq!(format_day(dt), "2024/03/05");
    }
}
