#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! Populate typed Rust values from dynamic, loosely-typed data.
//!
//! A [`Value`] tree, as produced by a document parser, a database driver or
//! a message decoder, is walked alongside a typed target. Scalars are coerced
//! deterministically between bools, strings, integers, floats and date-times;
//! mapping keys are matched to record fields exactly first, then ignoring
//! case; sequences are resized and filled positionally.
//!
//! ```
//! use mapcast::{record, from_value, value};
//!
//! #[derive(Debug, Default)]
//! struct Reading {
//!     sensor: String,
//!     celsius: f32,
//!     flags: Vec<bool>,
//! }
//!
//! record! {
//!     Reading { sensor, celsius, flags }
//! }
//!
//! let reading: Reading = from_value(&value!({
//!     "Sensor": 17,
//!     "celsius": "21.5",
//!     "flags": [1, "true", 0],
//! }))
//! .unwrap();
//! assert_eq!(reading.sensor, "17");
//! assert_eq!(reading.celsius, 21.5);
//! assert_eq!(reading.flags, [true, true, false]);
//! ```

mod coerce;

mod decode;
pub use decode::*;

mod error;
pub use error::*;

mod field_table;
pub use field_table::*;

mod from;
pub use from::*;

mod impls;

mod macros;

mod options;
pub use options::*;

mod record;
pub use record::{FieldDecl, Fields, Record, decode_record};

mod shape;
pub use shape::*;

pub use mapcast_value::{Mapping, Value, ValueKind, value};
