//! Option<T> and Box<T>: transparent wrappers around their inner target

use mapcast_value::Value;

use crate::{Decode, DecodeOptions, Elements, Fields, Result, Shape};

/// `None` is filled with `T::default()` on the first non-null write.
impl<T: Decode + Default> Decode for Option<T> {
    fn shape(&self) -> Shape {
        match self {
            Some(inner) => inner.shape(),
            None => T::default().shape(),
        }
    }

    fn decode_value(&mut self, value: &Value, options: &DecodeOptions) -> Result<()> {
        self.get_or_insert_with(T::default).decode_value(value, options)
    }

    fn as_fields_mut(&mut self) -> Option<&mut dyn Fields> {
        self.get_or_insert_with(T::default).as_fields_mut()
    }

    fn as_elements_mut(&mut self) -> Option<&mut dyn Elements> {
        self.get_or_insert_with(T::default).as_elements_mut()
    }
}

impl<T: Decode> Decode for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn decode_value(&mut self, value: &Value, options: &DecodeOptions) -> Result<()> {
        (**self).decode_value(value, options)
    }

    fn as_fields_mut(&mut self) -> Option<&mut dyn Fields> {
        (**self).as_fields_mut()
    }

    fn as_elements_mut(&mut self) -> Option<&mut dyn Elements> {
        (**self).as_elements_mut()
    }
}
