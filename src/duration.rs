//! Duration literals such as `20s`, `1h30m` or `1.5ms`.
//!
//! A literal is an optional sign followed by one or more `<number><unit>`
//! groups, where the number may carry a decimal fraction. Accepted units are
//! `ns`, `us` (also `µs` / `μs`), `ms`, `s`, `m` and `h`. The bare literal
//! `0` needs no unit.
//!
//! [`Duration`] cannot be negative, so a literal that evaluates below zero is
//! rejected rather than clamped.

use std::time::Duration;

use thiserror::Error;

const NANOS_PER_SEC: u128 = 1_000_000_000;

// Fraction digits beyond this do not change the nanosecond result.
const MAX_FRACTION_DIGITS: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("negative duration {0:?}")]
    Negative(String),

    #[error("duration {0:?} is too large")]
    Overflow(String),
}

/// Parse a duration literal.
///
/// ```
/// use std::time::Duration;
/// assert_eq!(argbind::parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
/// assert_eq!(argbind::parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());
    let overflow = || DurationError::Overflow(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_len = after_fraction
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_fraction.len());
        let (unit, tail) = after_fraction.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole_value: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut group = whole_value.checked_mul(scale).ok_or_else(overflow)?;

        if !fraction.is_empty() {
            let kept = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS as usize)];
            let numerator: u128 = kept.parse().map_err(|_| invalid())?;
            let denominator = 10u128.pow(kept.len() as u32);
            group = group
                .checked_add(numerator * scale / denominator)
                .ok_or_else(overflow)?;
        }

        total = total.checked_add(group).ok_or_else(overflow)?;
        rest = tail;
    }

    if negative && total > 0 {
        return Err(DurationError::Negative(input.to_string()));
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| overflow())?;
    let nanos = (total % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, nanos))
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        "h" => 3_600 * NANOS_PER_SEC,
        _ => return None,
    };
    Some(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds() {
        assert_eq!(parse_duration("20s").unwrap(), Duration::from_secs(20));
    }

    #[test]
    fn compound_groups_add_up() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(
            parse_duration("2m3s4ms").unwrap(),
            Duration::from_millis(123_004)
        );
    }

    #[test]
    fn fractional_hours() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
    }

    #[test]
    fn leading_dot_fraction() {
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn trailing_dot_is_accepted() {
        assert_eq!(parse_duration("5.s").unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn sub_second_units() {
        assert_eq!(parse_duration("300ms").unwrap(), Duration::from_millis(300));
        assert_eq!(parse_duration("7us").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("7µs").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("42ns").unwrap(), Duration::from_nanos(42));
    }

    #[test]
    fn bare_zero_needs_no_unit() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn explicit_plus_sign() {
        assert_eq!(parse_duration("+3s").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(parse_duration("-0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn negative_is_rejected() {
        assert_eq!(
            parse_duration("-1s"),
            Err(DurationError::Negative("-1s".into()))
        );
    }

    #[test]
    fn empty_is_invalid() {
        assert_eq!(parse_duration(""), Err(DurationError::Invalid("".into())));
        assert_eq!(parse_duration("-"), Err(DurationError::Invalid("-".into())));
    }

    #[test]
    fn number_without_unit() {
        assert_eq!(
            parse_duration("10"),
            Err(DurationError::MissingUnit("10".into()))
        );
    }

    #[test]
    fn unknown_unit() {
        assert_eq!(
            parse_duration("3x"),
            Err(DurationError::UnknownUnit {
                unit: "x".into(),
                input: "3x".into()
            })
        );
    }

    #[test]
    fn unit_without_number() {
        assert_eq!(parse_duration("s"), Err(DurationError::Invalid("s".into())));
        assert_eq!(parse_duration("."), Err(DurationError::Invalid(".".into())));
    }

    #[test]
    fn overflow_is_reported() {
        let huge = format!("{}h", u128::MAX);
        assert!(matches!(
            parse_duration(&huge),
            Err(DurationError::Overflow(_))
        ));
    }
}
