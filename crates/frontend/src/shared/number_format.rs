//! Number formatting for tables

/// Groups digits in threes with commas
///
/// ```text
/// format_grouped(1234567) == "1,234,567"
/// ```
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if value < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

pub fn format_yen(value: i64) -> String {
    format!("¥{}", format_grouped(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
        assert_eq!(format_grouped(-4400), "-4,400");
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(4400), "¥4,400");
    }
}
