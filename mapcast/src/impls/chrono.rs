//! chrono date-times. They are records as far as dispatch goes: a time source
//! is assigned, a mapping source has no fields to fill and is ignored.

use chrono::{DateTime, FixedOffset, Local, Utc};
use mapcast_value::Value;
use tracing::trace;

use crate::{Decode, DecodeError, DecodeOptions, Kind, Result, Shape};

macro_rules! impl_decode_for_datetime {
    ($($tz:ty => |$t:ident| $convert:expr;)*) => {
        $(
            impl Decode for DateTime<$tz> {
                fn shape(&self) -> Shape {
                    Shape::of::<Self>(Kind::Record)
                }

                fn decode_value(&mut self, value: &Value, _options: &DecodeOptions) -> Result<()> {
                    match value {
                        Value::Time($t) => {
                            *self = $convert;
                            Ok(())
                        }
                        Value::Mapping(_) => {
                            trace!(shape = %self.shape(), "mapping into a date-time, nothing to set");
                            Ok(())
                        }
                        other => Err(DecodeError::mismatch(self.shape(), other.kind())),
                    }
                }
            }
        )*
    };
}

impl_decode_for_datetime! {
    FixedOffset => |t| *t;
    Utc => |t| t.with_timezone(&Utc);
    Local => |t| t.with_timezone(&Local);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeErrorKind, decode};
    use chrono::TimeZone;
    use mapcast_value::{ValueKind, value};

    fn sample() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2023, 11, 14, 17, 30, 0)
            .unwrap()
    }

    #[test]
    fn time_is_assigned_across_zones() {
        let opts = DecodeOptions::default();

        let mut utc = DateTime::<Utc>::default();
        decode(&Value::Time(sample()), &mut utc, &opts).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2023, 11, 14, 22, 30, 0).unwrap());

        let mut fixed = DateTime::<FixedOffset>::default();
        decode(&Value::Time(sample()), &mut fixed, &opts).unwrap();
        assert_eq!(fixed.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(fixed, sample());
    }

    #[test]
    fn mapping_is_ignored() {
        let mut utc = DateTime::<Utc>::default();
        decode(&value!({ "year": 2020 }), &mut utc, &DecodeOptions::default()).unwrap();
        assert_eq!(utc, DateTime::<Utc>::default());
    }

    #[test]
    fn scalars_do_not_parse_into_time() {
        let mut utc = DateTime::<Utc>::default();
        let err = decode(
            &Value::from("2023-11-14T22:30:00Z"),
            &mut utc,
            &DecodeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err.kind,
            DecodeErrorKind::StructuralMismatch {
                found: ValueKind::String,
                ..
            }
        ));
    }
}
