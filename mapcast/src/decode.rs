//! The `Decode` trait: a writable, typed destination for a dynamic value.

use mapcast_value::Value;
use tracing::trace;

use crate::{DecodeOptions, Fields, PathSegment, Result, Shape};

/// A typed location a [`Value`] can be decoded into.
///
/// Implementations dispatch on their own [`Shape`] and coerce whatever dynamic
/// shape the source has into it, or fail with a structural mismatch. The trait
/// is dyn-compatible so records can hand out `&mut dyn Decode` for their fields.
///
/// Implementations are provided for `bool`, `String`, every integer and float
/// width, `Vec<T>`, `[T; N]`, `Option<T>`, `Box<T>`, string-keyed maps,
/// [`Value`] and the chrono date-time types. Records get one from
/// [`record!`](crate::record).
pub trait Decode {
    /// What this target accepts.
    fn shape(&self) -> Shape;

    /// Coerce `value` into `self`.
    ///
    /// `value` is never [`Value::Null`] when called through [`decode`]: a null
    /// source leaves the target untouched before dispatch happens.
    fn decode_value(&mut self, value: &Value, options: &DecodeOptions) -> Result<()>;

    /// Field access, for targets that are records with declared fields.
    fn as_fields_mut(&mut self) -> Option<&mut dyn Fields> {
        None
    }

    /// Element access, for targets that are variable-length sequences.
    fn as_elements_mut(&mut self) -> Option<&mut dyn Elements> {
        None
    }
}

/// Positional access to the elements of a sequence target.
pub trait Elements {
    /// Replace the contents with exactly `len` default elements.
    fn reset(&mut self, len: usize);

    /// The element at `index`, if in bounds.
    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Decode>;
}

/// Decode `value` into `target`.
///
/// A null `value` is a successful no-op. Everything else is handed to the
/// target's [`Decode::decode_value`].
pub fn decode<T: Decode + ?Sized>(
    value: &Value,
    target: &mut T,
    options: &DecodeOptions,
) -> Result<()> {
    if value.is_null() {
        trace!("null source, target left untouched");
        return Ok(());
    }
    trace!(shape = %target.shape(), source = %value.kind(), "decode");
    target.decode_value(value, options)
}

/// Shared sequence algorithm: an empty source leaves the target alone,
/// otherwise the target is reset to `items.len()` defaults and filled
/// positionally, stopping at the first failing element.
pub(crate) fn decode_elements<S>(
    target: &mut dyn Elements,
    items: &[S],
    mut decode_one: impl FnMut(&S, &mut dyn Decode) -> Result<()>,
) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    target.reset(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(slot) = target.element_mut(index) else {
            break;
        };
        decode_one(item, slot).map_err(|e| e.with_path(PathSegment::Index(index)))?;
    }
    Ok(())
}
