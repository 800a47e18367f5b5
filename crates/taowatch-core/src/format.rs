//! Display formatting for subnet metrics.
//!
//! All formatters are pure functions of a single raw value and never alter
//! the stored record. Anything falsy, non-numeric, or numerically zero
//! renders as the literal "0", never as "NaN", "null", or "undefined".

use crate::metric::Metric;
use rust_decimal::{Decimal, RoundingStrategy};

/// Magnitude fields arrive in base units; divide by 1e9 for display.
const BASE_UNIT_DIVISOR: u64 = 1_000_000_000;

/// Format a base-unit magnitude (market cap, liquidity, volume):
/// scaled down by 1e9, exactly two fractional digits, comma-grouped.
pub fn format_magnitude(value: &Metric) -> String {
    format_numeric(value, 2, true)
}

/// Format a price at full precision: exactly four fractional digits,
/// comma-grouped, no scaling.
pub fn format_price(value: &Metric) -> String {
    format_numeric(value, 4, false)
}

/// Format a signed percentage magnitude with exactly two fractional
/// digits. The caller appends the "%" sign.
pub fn format_percent(value: &Metric) -> String {
    format_numeric(value, 2, false)
}

fn format_numeric(value: &Metric, decimals: u32, scale_down: bool) -> String {
    let Some(raw) = value.as_decimal() else {
        return "0".to_string();
    };
    if raw.is_zero() {
        return "0".to_string();
    }
    let adjusted = if scale_down {
        raw / Decimal::from(BASE_UNIT_DIVISOR)
    } else {
        raw
    };
    let rounded =
        adjusted.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    grouped(rounded, decimals)
}

/// Render with a fixed fractional width and commas every three integer
/// digits.
fn grouped(value: Decimal, decimals: u32) -> String {
    let plain = value.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, f),
        None => (plain.as_str(), ""),
    };

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    let digits = int_part.as_bytes();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(*digit));
    }

    if decimals > 0 {
        out.push('.');
        out.push_str(frac_part);
        for _ in frac_part.len()..decimals as usize {
            out.push('0');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn metric(value: Value) -> Metric {
        Metric::new(value)
    }

    #[test]
    fn test_magnitude_scale() {
        assert_eq!(format_magnitude(&metric(json!(3_500_000_000_u64))), "3.50");
        assert_eq!(format_magnitude(&metric(json!(5e9))), "5.00");
        assert_eq!(format_magnitude(&metric(json!("7500000000"))), "7.50");
    }

    #[test]
    fn test_magnitude_grouping() {
        assert_eq!(
            format_magnitude(&metric(json!(5_000_000_000_000_000_000_u64))),
            "5,000,000,000.00"
        );
        assert_eq!(
            format_magnitude(&metric(json!(1_234_567_000_000_u64))),
            "1,234.57"
        );
    }

    #[test]
    fn test_price_precision() {
        assert_eq!(format_price(&metric(json!(0.123456))), "0.1235");
        assert_eq!(format_price(&metric(json!(1.2345))), "1.2345");
        assert_eq!(format_price(&metric(json!("2"))), "2.0000");
        assert_eq!(format_price(&metric(Value::Null)), "0");
    }

    #[test]
    fn test_percent_sign() {
        assert_eq!(format_percent(&metric(json!(-2.5))), "-2.50");
        assert_eq!(format_percent(&metric(json!(12.345))), "12.35");
    }

    #[test]
    fn test_falsy_inputs_render_zero() {
        for value in [json!(null), json!(0), json!(0.0), json!(""), json!("junk")] {
            assert_eq!(format_magnitude(&metric(value.clone())), "0");
            assert_eq!(format_price(&metric(value.clone())), "0");
            assert_eq!(format_percent(&metric(value)), "0");
        }
        assert_eq!(format_magnitude(&Metric::default()), "0");
    }

    #[test]
    fn test_string_zero_normalizes() {
        assert_eq!(format_magnitude(&metric(json!("0"))), "0");
        assert_eq!(format_percent(&metric(json!("0.00"))), "0");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let value = metric(json!(3_500_000_000_u64));
        assert_eq!(format_magnitude(&value), format_magnitude(&value));
    }

    #[test]
    fn test_negative_grouping() {
        assert_eq!(
            format_magnitude(&metric(json!(-2_500_000_000_000_i64))),
            "-2,500.00"
        );
    }
}
