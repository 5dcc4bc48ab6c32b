//! bool, String, integers, floats

use mapcast_value::Value;

use crate::coerce::{to_bool, to_f64, to_i64, to_string, to_u64};
use crate::{Decode, DecodeOptions, Kind, Result, Shape};

impl Decode for bool {
    fn shape(&self) -> Shape {
        Shape::of::<Self>(Kind::Bool)
    }

    fn decode_value(&mut self, value: &Value, options: &DecodeOptions) -> Result<()> {
        *self = to_bool(value, self.shape(), options)?;
        Ok(())
    }
}

impl Decode for String {
    fn shape(&self) -> Shape {
        Shape::of::<Self>(Kind::String)
    }

    fn decode_value(&mut self, value: &Value, _options: &DecodeOptions) -> Result<()> {
        *self = to_string(value, self.shape())?;
        Ok(())
    }
}

// Coerced at 64 bits, then narrowed with `as`: out-of-range values wrap.
macro_rules! impl_decode_for_number {
    ($kind:ident, $coerce:ident: $($ty:ty),*) => {
        $(
            impl Decode for $ty {
                fn shape(&self) -> Shape {
                    Shape::of::<Self>(Kind::$kind)
                }

                #[allow(clippy::unnecessary_cast)]
                fn decode_value(&mut self, value: &Value, options: &DecodeOptions) -> Result<()> {
                    *self = $coerce(value, self.shape(), options)? as $ty;
                    Ok(())
                }
            }
        )*
    };
}

impl_decode_for_number!(Int, to_i64: i8, i16, i32, i64, i128, isize);
impl_decode_for_number!(Uint, to_u64: u8, u16, u32, u64, u128, usize);
impl_decode_for_number!(Float, to_f64: f32, f64);

#[cfg(test)]
mod tests {
    use crate::{DecodeErrorKind, DecodeOptions, Kind, decode};
    use mapcast_value::{Value, ValueKind};

    #[test]
    fn narrow_targets_wrap() {
        let opts = DecodeOptions::default();
        let mut small = 0i8;
        decode(&Value::Int(300), &mut small, &opts).unwrap();
        assert_eq!(small, 44);

        let mut byte = 0u8;
        decode(&Value::from("257"), &mut byte, &opts).unwrap();
        assert_eq!(byte, 1);

        let mut wide = 0u128;
        decode(&Value::Uint(u64::MAX), &mut wide, &opts).unwrap();
        assert_eq!(wide, u128::from(u64::MAX));
    }

    #[test]
    fn f32_from_string() {
        let mut f = 0f32;
        decode(&Value::from("0.25"), &mut f, &DecodeOptions::default()).unwrap();
        assert_eq!(f, 0.25);
    }

    #[test]
    fn mismatch_names_the_narrow_type() {
        let mut n = 0u16;
        let err = decode(&Value::Sequence(vec![]), &mut n, &DecodeOptions::default()).unwrap_err();
        match err.kind {
            DecodeErrorKind::StructuralMismatch { expected, found } => {
                assert_eq!(expected.type_identifier, "u16");
                assert_eq!(expected.kind, Kind::Uint);
                assert_eq!(found, ValueKind::Sequence);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
