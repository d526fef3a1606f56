//! Rupee formatting for prompt text.

/// Groups digits the Indian way: last three, then pairs. `123456` → `1,23,456`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Annual rupees as lakhs per annum without trailing zeros. `862500` → `8.625`.
pub fn format_lpa(amount: u64) -> String {
    let whole = amount / 100_000;
    let frac = amount % 100_000;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:05}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

/// Percentage increase from `from` to `to`, rounded to the nearest whole percent.
pub fn percent_increase(from: u64, to: u64) -> Option<i64> {
    if from == 0 {
        return None;
    }
    let delta = to as f64 - from as f64;
    Some((delta / from as f64 * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr_small_values_untouched() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(999), "999");
    }

    #[test]
    fn test_format_inr_thousands() {
        assert_eq!(format_inr(1_000), "1,000");
        assert_eq!(format_inr(69_012), "69,012");
    }

    #[test]
    fn test_format_inr_lakhs_and_crores() {
        assert_eq!(format_inr(123_456), "1,23,456");
        assert_eq!(format_inr(862_500), "8,62,500");
        assert_eq!(format_inr(10_000_000), "1,00,00,000");
        assert_eq!(format_inr(123_456_789), "12,34,56,789");
    }

    #[test]
    fn test_format_lpa() {
        assert_eq!(format_lpa(862_500), "8.625");
        assert_eq!(format_lpa(1_600_000), "16");
        assert_eq!(format_lpa(1_450_000), "14.5");
        assert_eq!(format_lpa(50_000), "0.5");
    }

    #[test]
    fn test_percent_increase() {
        assert_eq!(percent_increase(862_500, 1_600_000), Some(86));
        assert_eq!(percent_increase(862_500, 2_100_000), Some(143));
        assert_eq!(percent_increase(0, 100), None);
    }
}
