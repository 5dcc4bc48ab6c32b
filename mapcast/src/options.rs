//! Knobs that influence coercion, threaded through every recursive call.
//!
//! [`DecodeOptions::default`] snapshots the process-wide defaults, which start
//! out as [`TimeUnit::Millisecond`] and [`BoolStrings::Exact`]. Changing a
//! default affects every later call that does not pass explicit options.

use core::sync::atomic::{AtomicU8, Ordering};

use tracing::debug;

/// Granularity used when a date-time is coerced into a number.
///
/// A date-time becomes "nanoseconds since the Unix epoch, divided by the
/// length of this unit".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TimeUnit {
    /// Whole seconds
    Second = 0,
    /// Milliseconds
    #[default]
    Millisecond = 1,
    /// Microseconds
    Microsecond = 2,
    /// Nanoseconds
    Nanosecond = 3,
}

impl TimeUnit {
    /// Length of one unit in nanoseconds.
    pub const fn nanos(self) -> i64 {
        match self {
            TimeUnit::Second => 1_000_000_000,
            TimeUnit::Millisecond => 1_000_000,
            TimeUnit::Microsecond => 1_000,
            TimeUnit::Nanosecond => 1,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => TimeUnit::Second,
            2 => TimeUnit::Microsecond,
            3 => TimeUnit::Nanosecond,
            _ => TimeUnit::Millisecond,
        }
    }
}

/// How a string is coerced into a `bool`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BoolStrings {
    /// `"true"` and `"1"` are true, every other string is false.
    #[default]
    Exact = 0,
    /// True when `"true"` or `"1"` occurs anywhere in the string, so
    /// `"untrue"` and `"10"` are true as well. Kept for data produced by
    /// systems that relied on this rule.
    Contains = 1,
}

impl BoolStrings {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => BoolStrings::Contains,
            _ => BoolStrings::Exact,
        }
    }

    /// Applies the rule to `s`.
    pub fn is_true(self, s: &str) -> bool {
        match self {
            BoolStrings::Exact => s == "true" || s == "1",
            BoolStrings::Contains => s.contains("true") || s.contains('1'),
        }
    }
}

static DEFAULT_TIME_UNIT: AtomicU8 = AtomicU8::new(TimeUnit::Millisecond as u8);
static DEFAULT_BOOL_STRINGS: AtomicU8 = AtomicU8::new(BoolStrings::Exact as u8);

/// The process-wide time unit picked up by [`DecodeOptions::default`].
pub fn default_time_unit() -> TimeUnit {
    TimeUnit::from_u8(DEFAULT_TIME_UNIT.load(Ordering::Relaxed))
}

/// Changes the process-wide time unit. Calls with explicit options are unaffected.
pub fn set_default_time_unit(unit: TimeUnit) {
    let previous = DEFAULT_TIME_UNIT.swap(unit as u8, Ordering::Relaxed);
    debug!(
        previous = ?TimeUnit::from_u8(previous),
        current = ?unit,
        "default time unit changed"
    );
}

/// The process-wide string-to-bool rule picked up by [`DecodeOptions::default`].
pub fn default_bool_strings() -> BoolStrings {
    BoolStrings::from_u8(DEFAULT_BOOL_STRINGS.load(Ordering::Relaxed))
}

/// Changes the process-wide string-to-bool rule.
pub fn set_default_bool_strings(rule: BoolStrings) {
    let previous = DEFAULT_BOOL_STRINGS.swap(rule as u8, Ordering::Relaxed);
    debug!(
        previous = ?BoolStrings::from_u8(previous),
        current = ?rule,
        "default bool string rule changed"
    );
}

/// Per-call decoding configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Divisor for date-time to number coercions
    pub time_unit: TimeUnit,
    /// String to bool rule
    pub bool_strings: BoolStrings,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            time_unit: default_time_unit(),
            bool_strings: default_bool_strings(),
        }
    }
}

impl DecodeOptions {
    /// Options with the given time unit.
    pub fn with_time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.time_unit = time_unit;
        self
    }

    /// Options with the given string-to-bool rule.
    pub fn with_bool_strings(mut self, bool_strings: BoolStrings) -> Self {
        self.bool_strings = bool_strings;
        self
    }
}
