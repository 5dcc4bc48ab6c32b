//! Scalar coercion rules.
//!
//! Each function takes the shape of the target being written, so a
//! structural mismatch can name it. Integer and float results are produced at
//! 64 bits; callers narrow them to the target width.

use chrono::{DateTime, FixedOffset, Local};
use mapcast_value::Value;

use crate::{DecodeError, DecodeOptions, Kind, Result, Shape};

/// Nanoseconds since the Unix epoch, without the `i64` range limit.
fn unix_nanos(t: &DateTime<FixedOffset>) -> i128 {
    i128::from(t.timestamp()) * 1_000_000_000 + i128::from(t.timestamp_subsec_nanos())
}

fn time_in_units(t: &DateTime<FixedOffset>, options: &DecodeOptions) -> i128 {
    unix_nanos(t) / i128::from(options.time_unit.nanos())
}

/// Unsigned targets reinterpret the nanosecond count as `u64` before
/// dividing, so times before the epoch wrap to large values.
fn time_in_units_unsigned(t: &DateTime<FixedOffset>, options: &DecodeOptions) -> u64 {
    (unix_nanos(t) as i64 as u64) / options.time_unit.nanos().unsigned_abs()
}

pub(crate) fn to_bool(value: &Value, expected: Shape, options: &DecodeOptions) -> Result<bool> {
    Ok(match value {
        Value::Bool(b) => *b,
        Value::String(s) => options.bool_strings.is_true(s),
        Value::Int(n) => *n == 1,
        Value::Uint(n) => *n == 1,
        Value::Float(n) => *n == 1.0,
        other => return Err(DecodeError::mismatch(expected, other.kind())),
    })
}

pub(crate) fn to_string(value: &Value, expected: Shape) -> Result<String> {
    Ok(match value {
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Int(n) => n.to_string(),
        Value::Uint(n) => n.to_string(),
        // `Display` for floats is the shortest text that round-trips and
        // never switches to exponent notation.
        Value::Float(n) => n.to_string(),
        Value::Time(t) => t
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        other => return Err(DecodeError::mismatch(expected, other.kind())),
    })
}

pub(crate) fn to_i64(value: &Value, expected: Shape, options: &DecodeOptions) -> Result<i64> {
    Ok(match value {
        Value::Bool(b) => i64::from(*b),
        Value::String(s) => match s.as_str() {
            "true" => 1,
            "false" => 0,
            _ => s
                .parse::<i64>()
                .map_err(|_| DecodeError::conversion(s, Kind::Int))?,
        },
        Value::Int(n) => *n,
        Value::Uint(n) => *n as i64,
        Value::Float(n) => *n as i64,
        Value::Time(t) => time_in_units(t, options) as i64,
        other => return Err(DecodeError::mismatch(expected, other.kind())),
    })
}

pub(crate) fn to_u64(value: &Value, expected: Shape, options: &DecodeOptions) -> Result<u64> {
    Ok(match value {
        Value::Bool(b) => u64::from(*b),
        Value::String(s) => match s.as_str() {
            "true" => 1,
            "false" => 0,
            _ => s
                .parse::<u64>()
                .map_err(|_| DecodeError::conversion(s, Kind::Uint))?,
        },
        Value::Int(n) => *n as u64,
        Value::Uint(n) => *n,
        Value::Float(n) => *n as u64,
        Value::Time(t) => time_in_units_unsigned(t, options),
        other => return Err(DecodeError::mismatch(expected, other.kind())),
    })
}

pub(crate) fn to_f64(value: &Value, expected: Shape, options: &DecodeOptions) -> Result<f64> {
    Ok(match value {
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => match s.as_str() {
            "true" => 1.0,
            "false" => 0.0,
            _ => s
                .parse::<f64>()
                .map_err(|_| DecodeError::conversion(s, Kind::Float))?,
        },
        Value::Int(n) => *n as f64,
        Value::Uint(n) => *n as f64,
        Value::Float(n) => *n,
        Value::Time(t) => unix_nanos(t) as f64 / options.time_unit.nanos() as f64,
        other => return Err(DecodeError::mismatch(expected, other.kind())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoolStrings, DecodeErrorKind, TimeUnit};
    use chrono::TimeZone;
    use mapcast_value::ValueKind;

    fn opts() -> DecodeOptions {
        DecodeOptions {
            time_unit: TimeUnit::Millisecond,
            bool_strings: BoolStrings::Exact,
        }
    }

    fn shape(kind: Kind) -> Shape {
        Shape::of::<()>(kind)
    }

    fn epoch_plus(secs: i64, nanos: u32) -> Value {
        Value::Time(
            FixedOffset::east_opt(3600)
                .unwrap()
                .timestamp_opt(secs, nanos)
                .unwrap(),
        )
    }

    #[test]
    fn bool_from_numbers_is_exactly_one() {
        let s = shape(Kind::Bool);
        assert!(to_bool(&Value::Int(1), s, &opts()).unwrap());
        assert!(to_bool(&Value::Uint(1), s, &opts()).unwrap());
        assert!(to_bool(&Value::Float(1.0), s, &opts()).unwrap());
        assert!(!to_bool(&Value::Int(-1), s, &opts()).unwrap());
        assert!(!to_bool(&Value::Int(2), s, &opts()).unwrap());
        assert!(!to_bool(&Value::Float(1.5), s, &opts()).unwrap());
        assert!(!to_bool(&Value::Uint(0), s, &opts()).unwrap());
    }

    #[test]
    fn bool_rejects_time_and_containers() {
        let err = to_bool(&epoch_plus(0, 0), shape(Kind::Bool), &opts()).unwrap_err();
        assert!(matches!(
            err.kind,
            DecodeErrorKind::StructuralMismatch {
                found: ValueKind::Time,
                ..
            }
        ));
        assert!(to_bool(&Value::Sequence(vec![]), shape(Kind::Bool), &opts()).is_err());
    }

    #[test]
    fn strings_from_numbers() {
        let s = shape(Kind::String);
        assert_eq!(to_string(&Value::Int(-42), s).unwrap(), "-42");
        assert_eq!(to_string(&Value::Uint(u64::MAX), s).unwrap(), "18446744073709551615");
        assert_eq!(to_string(&Value::Float(0.1), s).unwrap(), "0.1");
        assert_eq!(to_string(&Value::Float(2.0), s).unwrap(), "2");
        assert_eq!(to_string(&Value::Float(1e21), s).unwrap(), "1000000000000000000000");
        assert_eq!(to_string(&Value::Bool(false), s).unwrap(), "false");
    }

    #[test]
    fn string_from_time_uses_local_clock() {
        let t = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 2, 29, 13, 5, 9)
            .unwrap();
        let expected = t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string();
        assert_eq!(to_string(&Value::Time(t), shape(Kind::String)).unwrap(), expected);
    }

    #[test]
    fn integers_from_strings() {
        let s = shape(Kind::Int);
        assert_eq!(to_i64(&Value::from("true"), s, &opts()).unwrap(), 1);
        assert_eq!(to_i64(&Value::from("false"), s, &opts()).unwrap(), 0);
        assert_eq!(to_i64(&Value::from("-17"), s, &opts()).unwrap(), -17);
        let err = to_i64(&Value::from("TRUE"), s, &opts()).unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::ConversionFailure {
                input: "TRUE".into(),
                target: Kind::Int
            }
        );
        assert!(to_u64(&Value::from("-1"), shape(Kind::Uint), &opts()).is_err());
        assert!(to_f64(&Value::from("1.5.2"), shape(Kind::Float), &opts()).is_err());
        assert_eq!(to_f64(&Value::from("2.5e3"), shape(Kind::Float), &opts()).unwrap(), 2500.0);
    }

    #[test]
    fn floats_truncate_toward_zero() {
        let s = shape(Kind::Int);
        assert_eq!(to_i64(&Value::Float(2.9), s, &opts()).unwrap(), 2);
        assert_eq!(to_i64(&Value::Float(-2.9), s, &opts()).unwrap(), -2);
        assert_eq!(to_u64(&Value::Float(7.99), shape(Kind::Uint), &opts()).unwrap(), 7);
    }

    #[test]
    fn time_is_scaled_by_unit() {
        let t = epoch_plus(1_700_000_000, 123_456_789);
        assert_eq!(to_i64(&t, shape(Kind::Int), &opts()).unwrap(), 1_700_000_000_123);
        let secs = opts().with_time_unit(TimeUnit::Second);
        assert_eq!(to_i64(&t, shape(Kind::Int), &secs).unwrap(), 1_700_000_000);
        let nanos = opts().with_time_unit(TimeUnit::Nanosecond);
        assert_eq!(
            to_u64(&t, shape(Kind::Uint), &nanos).unwrap(),
            1_700_000_000_123_456_789
        );
        let micros = opts().with_time_unit(TimeUnit::Microsecond);
        let as_float = to_f64(&t, shape(Kind::Float), &micros).unwrap();
        assert!((as_float - 1_700_000_000_123_456.789).abs() < 1.0);
    }

    #[test]
    fn unsigned_time_before_epoch_wraps_then_divides() {
        let before = epoch_plus(-1, 0);
        assert_eq!(
            to_u64(&before, shape(Kind::Uint), &opts()).unwrap(),
            18_446_744_072_709
        );
        assert_eq!(to_i64(&before, shape(Kind::Int), &opts()).unwrap(), -1000);
    }

    #[test]
    fn numbers_reject_containers() {
        for value in [Value::Sequence(vec![]), Value::Mapping(Default::default())] {
            assert!(to_i64(&value, shape(Kind::Int), &opts()).is_err());
            assert!(to_u64(&value, shape(Kind::Uint), &opts()).is_err());
            assert!(to_f64(&value, shape(Kind::Float), &opts()).is_err());
            assert!(to_string(&value, shape(Kind::String)).is_err());
        }
    }
}
