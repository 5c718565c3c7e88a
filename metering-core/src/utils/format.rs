//! Display formatting for token counts and dates.
//!
//! The abbreviation rules are a compatibility contract with the display
//! widgets; changing them changes what users see on every meter.

use chrono::NaiveDate;

/// Abbreviate a token count: "1.2M" from one million up (no decimal when
/// exactly divisible by a million), "250k" from one thousand up (rounded
/// to whole thousands), plain digits below that.
pub fn format_tokens(tokens: u64) -> String {
    if tokens >= 1_000_000 {
        if tokens % 1_000_000 == 0 {
            format!("{}M", tokens / 1_000_000)
        } else {
            format!("{:.1}M", tokens as f64 / 1_000_000.0)
        }
    } else if tokens >= 1_000 {
        format!("{}k", (tokens + 500) / 1_000)
    } else {
        tokens.to_string()
    }
}

/// Long-form reset date, e.g. "September 1, 2026".
pub fn format_reset_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens_below_one_thousand() {
        assert_eq!(format_tokens(0), "0");
        assert_eq!(format_tokens(999), "999");
    }

    #[test]
    fn test_format_tokens_thousands() {
        assert_eq!(format_tokens(1_000), "1k");
        assert_eq!(format_tokens(1_499), "1k");
        assert_eq!(format_tokens(1_500), "2k");
        assert_eq!(format_tokens(250_000), "250k");
        assert_eq!(format_tokens(999_499), "999k");
    }

    #[test]
    fn test_format_tokens_millions() {
        assert_eq!(format_tokens(1_000_000), "1M");
        assert_eq!(format_tokens(1_200_000), "1.2M");
        assert_eq!(format_tokens(2_000_000), "2M");
        assert_eq!(format_tokens(2_500_000), "2.5M");
    }

    #[test]
    fn test_format_reset_date() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        assert_eq!(format_reset_date(date), "September 1, 2026");
    }
}
