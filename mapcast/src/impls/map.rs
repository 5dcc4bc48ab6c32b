//! String-keyed maps. The source mapping is decoded into a fresh map, which
//! replaces the target only once every entry has succeeded.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use mapcast_value::{Mapping, Value};

use crate::{Decode, DecodeError, DecodeOptions, Kind, PathSegment, Result, Shape, decode};

fn decode_entries<V: Decode + Default>(
    mapping: &Mapping,
    options: &DecodeOptions,
    mut insert: impl FnMut(String, V),
) -> Result<()> {
    for (key, item) in mapping {
        let mut slot = V::default();
        decode(item, &mut slot, options).map_err(|e| e.with_path(PathSegment::Field(key.clone())))?;
        insert(key.clone(), slot);
    }
    Ok(())
}

macro_rules! impl_decode_for_map {
    ($([$($generics:tt)*] $map:ty => $new:expr;)*) => {
        $(
            impl<$($generics)*> Decode for $map {
                fn shape(&self) -> Shape {
                    Shape::of::<Self>(Kind::Map)
                }

                fn decode_value(&mut self, value: &Value, options: &DecodeOptions) -> Result<()> {
                    let Value::Mapping(mapping) = value else {
                        return Err(DecodeError::mismatch(self.shape(), value.kind()));
                    };
                    let mut fresh: Self = $new(mapping.len());
                    decode_entries(mapping, options, |k, v| {
                        fresh.insert(k, v);
                    })?;
                    *self = fresh;
                    Ok(())
                }
            }
        )*
    };
}

impl_decode_for_map! {
    [V: Decode + Default, S: BuildHasher + Default] HashMap<String, V, S> =>
        |len| HashMap::with_capacity_and_hasher(len, S::default());
    [V: Decode + Default, S: BuildHasher + Default] IndexMap<String, V, S> =>
        |len| IndexMap::with_capacity_and_hasher(len, S::default());
    [V: Decode + Default] BTreeMap<String, V> =>
        |_| BTreeMap::new();
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcast_value::value;

    #[test]
    fn entries_are_coerced() {
        let mut out: HashMap<String, i64> = HashMap::new();
        decode(
            &value!({ "a": "1", "b": 2.5, "c": true }),
            &mut out,
            &DecodeOptions::default(),
        )
        .unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out["a"], 1);
        assert_eq!(out["b"], 2);
        assert_eq!(out["c"], 1);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut out: IndexMap<String, String> = IndexMap::new();
        decode(&value!({ "z": 1, "a": 2 }), &mut out, &DecodeOptions::default()).unwrap();
        let keys: Vec<_> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn previous_contents_are_replaced() {
        let mut out = BTreeMap::from([("old".to_string(), 1u8)]);
        decode(&value!({ "new": 2 }), &mut out, &DecodeOptions::default()).unwrap();
        assert_eq!(out, BTreeMap::from([("new".to_string(), 2u8)]));
    }

    #[test]
    fn failure_leaves_target_alone() {
        let mut out = BTreeMap::from([("old".to_string(), 1u8)]);
        let err = decode(
            &value!({ "ok": 2, "bad": "nope" }),
            &mut out,
            &DecodeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.path, [PathSegment::Field("bad".into())]);
        assert_eq!(out, BTreeMap::from([("old".to_string(), 1u8)]));
    }

    #[test]
    fn non_mapping_is_a_mismatch() {
        let mut out: HashMap<String, bool> = HashMap::new();
        let err = decode(&value!([true]), &mut out, &DecodeOptions::default()).unwrap_err();
        assert!(matches!(
            err.kind,
            crate::DecodeErrorKind::StructuralMismatch { expected, .. } if expected.kind == Kind::Map
        ));
    }
}
