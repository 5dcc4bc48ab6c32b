//! `Value` as a target: takes the source verbatim.

use mapcast_value::Value;

use crate::{Decode, DecodeOptions, Kind, Result, Shape};

impl Decode for Value {
    fn shape(&self) -> Shape {
        Shape::of::<Self>(Kind::Any)
    }

    fn decode_value(&mut self, value: &Value, _options: &DecodeOptions) -> Result<()> {
        self.clone_from(value);
        Ok(())
    }
}
