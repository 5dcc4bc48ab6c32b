//! `mapcast-value` provides the dynamic value tree that `mapcast` decodes from.
//!
//! A [`Value`] is what a wire-format decoder (JSON, MessagePack, a database
//! row, ...) hands over before anything is known about the target type:
//!
//! - **Nine shapes**: null, bool, string, signed and unsigned integers, floats,
//!   a date-time, string-keyed mappings and sequences
//! - **Widening constructors**: every primitive width converts into the 64-bit
//!   variant of its family through `From`
//! - **Ordered mappings**: [`Mapping`] keeps insertion order so traversal and
//!   error reporting are deterministic
//!
//! ```
//! use mapcast_value::{Value, ValueKind, value};
//!
//! let v = value!({ "id": 7, "tags": ["a", "b"], "parent": null });
//! assert_eq!(v.kind(), ValueKind::Mapping);
//! assert_eq!(v.get("id"), Some(&Value::Int(7)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod value;
pub use value::*;

mod format;

mod macros;

/// Re-exported so `value!` expansions and downstream crates agree on the map type.
pub use indexmap;
