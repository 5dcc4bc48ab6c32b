use core::fmt;

use mapcast_value::ValueKind;
use thiserror::Error;

use crate::{Kind, Shape};

/// A step on the way from the root value to the place an error happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A mapping key, as spelled in the source
    Field(String),
    /// A sequence index
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// What went wrong while decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeErrorKind {
    /// The source's shape cannot be reconciled with the target's shape under
    /// any coercion rule.
    #[error("structural mismatch: expected {expected}, found {found}")]
    StructuralMismatch {
        /// The target being written
        expected: Shape,
        /// The shape of the source value
        found: ValueKind,
    },

    /// A string could not be parsed into the requested numeric kind.
    #[error("cannot convert {input:?} to {target}")]
    ConversionFailure {
        /// The offending text
        input: String,
        /// The numeric kind that was requested
        target: Kind,
    },

    /// An entry point was handed a target it cannot work with.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Why the argument was rejected
        message: String,
    },
}

/// Error returned by every decoding entry point.
///
/// Carries the first failure encountered during the traversal, along with
/// the path from the root of the source value to where it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    /// The specific kind of error
    pub kind: DecodeErrorKind,
    /// Path through the source value, outermost segment first
    pub path: Vec<PathSegment>,
}

impl DecodeError {
    /// Create an error with an empty path.
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    pub(crate) fn mismatch(expected: Shape, found: ValueKind) -> Self {
        Self::new(DecodeErrorKind::StructuralMismatch { expected, found })
    }

    pub(crate) fn conversion(input: &str, target: Kind) -> Self {
        Self::new(DecodeErrorKind::ConversionFailure {
            input: input.to_owned(),
            target,
        })
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::InvalidArgument {
            message: message.into(),
        })
    }

    /// Prepend a path segment (errors are built at the leaf and unwind outward).
    pub fn with_path(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    /// Format the path as a string, `<root>` when empty.
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            return "<root>".into();
        }
        let mut s = String::new();
        for seg in &self.path {
            use fmt::Write;
            let _ = write!(s, "{seg}");
        }
        s
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "at {}: {}", self.path_string(), self.kind)
        }
    }
}

impl core::error::Error for DecodeError {}

impl From<DecodeErrorKind> for DecodeError {
    fn from(kind: DecodeErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for decoding.
pub type Result<T> = core::result::Result<T, DecodeError>;
