//! Currency formatting helpers.

/// Formats a dollar amount in US conventions: `$` prefix, comma thousands
/// separators, two decimal places, sign ahead of the symbol.
///
/// Any non-finite value formats as `"$NaN"`. An unparsable price upstream
/// produces a NaN notional, and the table shows it as-is rather than
/// hiding the bad row.
///
/// # Examples
///
/// ```
/// use cns_fails_report::format_usd;
///
/// assert_eq!(format_usd(22500.0), "$22,500.00");
/// assert_eq!(format_usd(-500.0), "-$500.00");
/// assert_eq!(format_usd(f64::NAN), "$NaN");
/// assert_eq!(format_usd(f64::INFINITY), "$NaN");
/// ```
#[must_use]
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "$NaN".to_string();
    }

    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    };
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut with_separators = String::with_capacity(integer_part.len() + 4);
    let digits: Vec<char> = integer_part.chars().collect();
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            with_separators.push(',');
        }
        with_separators.push(*ch);
    }

    format!("{sign}${with_separators}.{decimal_part}")
}
