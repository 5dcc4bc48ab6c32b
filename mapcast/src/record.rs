//! Records: targets with named fields, resolved through a [`FieldTable`].

use mapcast_value::{Mapping, Value};
use tracing::trace;

use crate::{Decode, DecodeError, DecodeOptions, FieldTable, PathSegment, Result, decode};

/// Field access by declaration index, the dyn-compatible half of [`Record`].
pub trait Fields {
    /// The field declared at `index`.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Decode>;

    /// The lookup table for this record's type.
    fn field_table(&self) -> &'static FieldTable;
}

/// A struct whose fields can be populated from a [`Mapping`].
///
/// Usually implemented through [`record!`](crate::record).
pub trait Record: Decode + Fields + 'static {
    /// Fields in declaration order. Indices are what [`Fields::field_mut`] accepts.
    fn declared_fields() -> Vec<FieldDecl>;
}

/// A field as declared on a record, before embedded records are expanded.
#[derive(Debug, Clone, Copy)]
pub struct FieldDecl {
    /// External name
    pub name: &'static str,
    /// Position passed to [`Fields::field_mut`]
    pub index: usize,
    /// For embedded records, their declared fields
    pub embedded: Option<fn() -> Vec<FieldDecl>>,
}

impl FieldDecl {
    /// A regular field, matched by `name`.
    pub const fn named(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            embedded: None,
        }
    }

    /// An embedded record whose own fields are matched as if they were
    /// declared on the outer record. `project` only pins down the field type.
    pub fn embedded<R, F: Record>(
        name: &'static str,
        index: usize,
        _project: impl Fn(&R) -> &F,
    ) -> Self {
        Self {
            name,
            index,
            embedded: Some(F::declared_fields),
        }
    }
}

/// `Decode::decode_value` for records: the source must be a mapping.
pub fn decode_record<R: Record>(target: &mut R, value: &Value, options: &DecodeOptions) -> Result<()> {
    match value {
        Value::Mapping(mapping) => decode_fields(mapping, target, FieldTable::of::<R>(), options),
        other => Err(DecodeError::mismatch(target.shape(), other.kind())),
    }
}

/// Decode every key of `mapping` that resolves to a field of `target`.
///
/// Keys that match no field are skipped. Fields are written one by one, so a
/// failure leaves the fields written before it in place.
pub(crate) fn decode_fields(
    mapping: &Mapping,
    target: &mut dyn Fields,
    table: &FieldTable,
    options: &DecodeOptions,
) -> Result<()> {
    for (key, value) in mapping {
        let Some(entry) = table.lookup(key) else {
            trace!(key = key.as_str(), "no matching field, skipped");
            continue;
        };
        let Some(slot) = resolve(target, &entry.path) else {
            trace!(key = key.as_str(), path = ?entry.path, "field not reachable, skipped");
            continue;
        };
        decode(value, slot, options).map_err(|e| e.with_path(PathSegment::Field(key.clone())))?;
    }
    Ok(())
}

/// Walk an index path through embedded records down to the field it names.
fn resolve<'a>(root: &'a mut dyn Fields, path: &[usize]) -> Option<&'a mut dyn Decode> {
    let (&last, parents) = path.split_last()?;
    let mut node = root;
    for &index in parents {
        node = node.field_mut(index)?.as_fields_mut()?;
    }
    node.field_mut(last)
}
