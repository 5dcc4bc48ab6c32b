//! `Decode` implementations for std, chrono and `Value` targets.

mod scalar;

mod list;

mod pointer;

mod map;

mod value;

mod chrono;
