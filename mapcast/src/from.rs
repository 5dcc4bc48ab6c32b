//! Entry points.
//!
//! The `_with` variants take explicit [`DecodeOptions`]; the others use
//! [`DecodeOptions::default`], i.e. the current process-wide defaults.

use mapcast_value::{Mapping, Value};
use tracing::debug;

use crate::decode::decode_elements;
use crate::record::decode_fields;
use crate::{Decode, DecodeError, DecodeOptions, FieldTable, Kind, Record, Result, decode};

/// Populate the fields of `target` from `mapping`.
///
/// Keys are matched to fields exactly first, then ignoring case; keys with no
/// matching field are ignored. On error, fields written before the failing
/// one keep their new values.
pub fn from_mapping<T: Record>(mapping: &Mapping, target: &mut T) -> Result<()> {
    from_mapping_with(mapping, target, &DecodeOptions::default())
}

/// [`from_mapping`] with explicit options.
pub fn from_mapping_with<T: Record>(
    mapping: &Mapping,
    target: &mut T,
    options: &DecodeOptions,
) -> Result<()> {
    debug!(
        record = core::any::type_name::<T>(),
        keys = mapping.len(),
        "from_mapping"
    );
    decode_fields(mapping, target, FieldTable::of::<T>(), options)
}

/// Fill `target` with one record per mapping, in order.
///
/// An empty `mappings` leaves `target` untouched. Otherwise `target` is
/// replaced by `mappings.len()` default records which are then populated
/// positionally; on error the records before the failing one are populated
/// and the rest stay at their defaults.
pub fn from_mappings<T: Record + Default>(mappings: &[Mapping], target: &mut Vec<T>) -> Result<()> {
    from_mappings_with(mappings, target, &DecodeOptions::default())
}

/// [`from_mappings`] with explicit options.
pub fn from_mappings_with<T: Record + Default>(
    mappings: &[Mapping],
    target: &mut Vec<T>,
    options: &DecodeOptions,
) -> Result<()> {
    debug!(
        record = core::any::type_name::<T>(),
        len = mappings.len(),
        "from_mappings"
    );
    decode_elements(target, mappings, |mapping, slot| {
        decode_mapping(mapping, slot, options)
    })
}

/// Decode `value` into a fresh `T::default()`.
///
/// A null `value` yields the default unchanged.
pub fn from_value<T: Decode + Default>(value: &Value) -> Result<T> {
    from_value_with(value, &DecodeOptions::default())
}

/// [`from_value`] with explicit options.
pub fn from_value_with<T: Decode + Default>(value: &Value, options: &DecodeOptions) -> Result<T> {
    let mut target = T::default();
    decode(value, &mut target, options)?;
    Ok(target)
}

/// Populate a record behind a type-erased reference.
///
/// Fails with [`InvalidArgument`](crate::DecodeErrorKind::InvalidArgument) when
/// `target` is not a record. A record without declared fields, such as a
/// date-time, is left untouched.
pub fn decode_mapping(
    mapping: &Mapping,
    target: &mut dyn Decode,
    options: &DecodeOptions,
) -> Result<()> {
    let shape = target.shape();
    if shape.kind != Kind::Record {
        return Err(DecodeError::invalid_argument(format!(
            "expected a record target, got {shape}"
        )));
    }
    match target.as_fields_mut() {
        Some(fields) => {
            let table = fields.field_table();
            decode_fields(mapping, fields, table, options)
        }
        None => Ok(()),
    }
}

/// Populate a sequence of records behind a type-erased reference.
///
/// Fails with [`InvalidArgument`](crate::DecodeErrorKind::InvalidArgument) when
/// `target` is not a variable-length sequence, or, for a non-empty
/// `mappings`, when its elements are not records.
pub fn decode_mappings(
    mappings: &[Mapping],
    target: &mut dyn Decode,
    options: &DecodeOptions,
) -> Result<()> {
    let shape = target.shape();
    let invalid = || {
        DecodeError::invalid_argument(format!("expected a sequence target, got {shape}"))
    };
    if shape.kind != Kind::Sequence {
        return Err(invalid());
    }
    // an empty `Option<Vec<_>>` would be allocated by `as_elements_mut`
    if mappings.is_empty() {
        return Ok(());
    }
    let Some(elements) = target.as_elements_mut() else {
        return Err(invalid());
    };
    decode_elements(elements, mappings, |mapping, slot| {
        decode_mapping(mapping, slot, options)
    })
}
