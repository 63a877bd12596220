/// Reads the leading integer of a comma-grouped statistic such as `"2,847+"`.
pub fn parse_grouped(text: &str) -> Option<u64> {
    let digits: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// The statistic after one more signup, or `None` when it holds no number.
pub fn increment_stat(text: &str) -> Option<String> {
    parse_grouped(text).map(|count| format_grouped(count.saturating_add(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_across_group_boundary() {
        assert_eq!(increment_stat("999").as_deref(), Some("1,000"));
        assert_eq!(increment_stat("2,847").as_deref(), Some("2,848"));
        assert_eq!(increment_stat("1,234,567").as_deref(), Some("1,234,568"));
    }

    #[test]
    fn ignores_trailing_suffix() {
        assert_eq!(parse_grouped("12,000+"), Some(12_000));
    }

    #[test]
    fn non_numeric_stat_is_left_alone() {
        assert_eq!(increment_stat("Soon"), None);
        assert_eq!(increment_stat(""), None);
    }

    #[test]
    fn small_numbers_have_no_separator() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(42), "42");
        assert_eq!(format_grouped(100_000), "100,000");
    }
}
