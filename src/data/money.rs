//! Brazilian currency parsing and formatting.
//!
//! Monetary cells arrive as text such as `"R$ 1.234,56"`. They are cleaned into a
//! plain decimal string, parsed into a [`Decimal`] and rounded to cents.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of decimal places kept for every monetary value.
pub const CENTS_SCALE: u32 = 2;

/// Round a value to cents using banker's rounding.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENTS_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Clean a raw currency cell into a plain decimal string.
///
/// Drops every `R`, `$` and whitespace character, rewrites `,` as `.`, then treats
/// every `.` except the last as a thousands separator.
///
/// `"R$ 1.234,56"` becomes `"1234.56"` and `"12,3"` becomes `"12.3"`.
pub fn correct_decimal_separators(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != 'R' && *c != '$' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let parts: Vec<&str> = cleaned.split('.').collect();
    if parts.len() > 2 {
        let last = parts.len() - 1;
        format!("{}.{}", parts[..last].concat(), parts[last])
    } else {
        cleaned
    }
}

/// Parse a raw currency cell into a value rounded to cents.
pub fn parse_brl(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let corrected = correct_decimal_separators(raw);
    Decimal::from_str(&corrected).map(round_cents)
}

/// Format a value as Brazilian currency: `1234.5` → `"R$ 1.234,50"`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_cents(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!(
        "R$ {}{},{}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_correct_decimal_separators() {
        assert_eq!(correct_decimal_separators("1.234,56"), "1234.56");
        assert_eq!(correct_decimal_separators("12,3"), "12.3");
        assert_eq!(correct_decimal_separators("R$ 1.234.567,89"), "1234567.89");
        assert_eq!(correct_decimal_separators("R$\u{a0}100,00"), "100.00");
        assert_eq!(correct_decimal_separators("  42 "), "42");
    }

    #[test]
    fn test_correction_is_idempotent_on_output() {
        let once = correct_decimal_separators("R$ 9.876.543,21");
        assert_eq!(correct_decimal_separators(&once), once);
    }

    #[test]
    fn test_parse_brl() {
        assert_eq!(parse_brl("1.234,56").unwrap(), dec("1234.56"));
        assert_eq!(parse_brl("12,3").unwrap(), dec("12.3"));
        assert_eq!(parse_brl("R$ 100,00").unwrap(), dec("100"));
        assert_eq!(parse_brl("R$ -50,255").unwrap(), dec("-50.26"));
        assert_eq!(parse_brl("0,125").unwrap(), dec("0.12"));
    }

    #[test]
    fn test_parse_brl_rejects_garbage() {
        assert!(parse_brl("abc").is_err());
        assert!(parse_brl("R$").is_err());
        assert!(parse_brl("").is_err());
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_brl(dec("1234.5")), "R$ 1.234,50");
        assert_eq!(format_brl(dec("1000000")), "R$ 1.000.000,00");
        assert_eq!(format_brl(dec("999.999")), "R$ 1.000,00");
        assert_eq!(format_brl(dec("12.3")), "R$ 12,30");
        assert_eq!(format_brl(dec("-1234.5")), "R$ -1.234,50");
        assert_eq!(format_brl(dec("-0.001")), "R$ 0,00");
    }
}
