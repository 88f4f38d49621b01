//! Rupee display formatting
//!
//! Indian numbering groups the three digits nearest the decimal point, then
//! pairs after that: 2,00,000 rather than 200,000. Compact mode quotes large
//! amounts in lakhs (1L = 1,00,000).

/// Threshold above which compact mode switches to lakh notation
const LAKH: f64 = 100_000.0;

/// Format a rupee amount for display, with no fractional digits
///
/// Negative amounts carry the minus sign before the currency symbol. Compact
/// mode only engages at or above one lakh; smaller amounts keep the full
/// grouped form.
///
/// # Example
/// ```
/// use plan_illustration::format_currency;
///
/// assert_eq!(format_currency(200_000.0, false), "₹2,00,000");
/// assert_eq!(format_currency(200_000.0, true), "₹2L");
/// assert_eq!(format_currency(350_000.0, true), "₹3.5L");
/// ```
pub fn format_currency(amount: f64, compact: bool) -> String {
    if compact && amount >= LAKH {
        let lakhs = amount / LAKH;
        let text = if lakhs >= 10.0 {
            format!("{:.0}", lakhs)
        } else {
            let one_decimal = format!("{:.1}", lakhs);
            one_decimal
                .strip_suffix(".0")
                .unwrap_or(&one_decimal)
                .to_string()
        };
        return format!("₹{}L", text);
    }

    let rupees = amount.round() as i64;
    if rupees < 0 {
        format!("-₹{}", group_indian(rupees.unsigned_abs()))
    } else {
        format!("₹{}", group_indian(rupees as u64))
    }
}

/// Group an unsigned digit string Indian-style: last three, then twos
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(0.0, false), "₹0");
        assert_eq!(format_currency(999.0, false), "₹999");
        assert_eq!(format_currency(9_006.0, false), "₹9,006");
        assert_eq!(format_currency(99_999.0, false), "₹99,999");
        assert_eq!(format_currency(200_000.0, false), "₹2,00,000");
        assert_eq!(format_currency(1_000_000.0, false), "₹10,00,000");
        assert_eq!(format_currency(123_456_789.0, false), "₹12,34,56,789");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-1_000.0, false), "-₹1,000");
        assert_eq!(format_currency(-200_000.0, false), "-₹2,00,000");
        // Negative amounts never compact
        assert_eq!(format_currency(-200_000.0, true), "-₹2,00,000");
    }

    #[test]
    fn test_compact_lakhs() {
        assert_eq!(format_currency(200_000.0, true), "₹2L");
        assert_eq!(format_currency(350_000.0, true), "₹3.5L");
        assert_eq!(format_currency(1_000_000.0, true), "₹10L");
        assert_eq!(format_currency(1_240_000.0, true), "₹12L");
    }

    #[test]
    fn test_compact_below_threshold() {
        // Below one lakh the full grouped form is kept even in compact mode
        assert_eq!(format_currency(99_999.0, true), "₹99,999");
        assert_eq!(format_currency(9_006.0, true), "₹9,006");
    }
}
