//! Static descriptions of decode targets.

use core::fmt;

/// The semantic category of a decode target: what kind of source it can be
/// coerced from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Kind {
    /// Named fields resolved through a field table, e.g. a `record!` struct
    /// or a date-time
    Record,
    /// Fixed-size array, e.g. `[T; 3]`. Never decodable: its length cannot be
    /// renegotiated from dynamic data
    Array,
    /// Variable-size list, e.g. `Vec<T>`
    Sequence,
    /// `bool`
    Bool,
    /// `String`
    String,
    /// Signed integers of any width
    Int,
    /// Unsigned integers of any width
    Uint,
    /// `f32` / `f64`
    Float,
    /// String-keyed maps, e.g. `HashMap<String, V>`
    Map,
    /// Accepts any source verbatim, e.g. `Value`
    Any,
}

impl Kind {
    /// Lower-case name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Record => "record",
            Kind::Array => "array",
            Kind::Sequence => "sequence",
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Map => "map",
            Kind::Any => "any",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type identity and [`Kind`] of a decode target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Rust type name, as reported by [`core::any::type_name`]
    pub type_identifier: &'static str,
    /// What the target accepts
    pub kind: Kind,
}

impl Shape {
    /// Describes `T` as a target of the given kind.
    pub fn of<T: ?Sized>(kind: Kind) -> Self {
        Self {
            type_identifier: core::any::type_name::<T>(),
            kind,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind, self.type_identifier)
    }
}
