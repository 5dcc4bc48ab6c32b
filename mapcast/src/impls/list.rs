//! Vec<T> and [T; N]

use mapcast_value::Value;

use crate::decode::decode_elements;
use crate::{Decode, DecodeError, DecodeOptions, Elements, Kind, Result, Shape, decode};

impl<T: Decode + Default> Decode for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::of::<Self>(Kind::Sequence)
    }

    fn decode_value(&mut self, value: &Value, options: &DecodeOptions) -> Result<()> {
        let Value::Sequence(items) = value else {
            return Err(DecodeError::mismatch(self.shape(), value.kind()));
        };
        decode_elements(self, items, |item, slot| decode(item, slot, options))
    }

    fn as_elements_mut(&mut self) -> Option<&mut dyn Elements> {
        Some(self)
    }
}

impl<T: Decode + Default> Elements for Vec<T> {
    fn reset(&mut self, len: usize) {
        self.clear();
        self.resize_with(len, T::default);
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Decode> {
        self.get_mut(index).map(|slot| slot as &mut dyn Decode)
    }
}

/// Fixed-size arrays are never decodable: their length cannot follow the source.
impl<T: Decode, const N: usize> Decode for [T; N] {
    fn shape(&self) -> Shape {
        Shape::of::<Self>(Kind::Array)
    }

    fn decode_value(&mut self, value: &Value, _options: &DecodeOptions) -> Result<()> {
        Err(DecodeError::mismatch(self.shape(), value.kind()))
    }
}
