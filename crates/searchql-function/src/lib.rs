//! Builtin-function registry for the SearchQL expression compiler
//!
//! The closed set of function and operator names the compiler recognizes
//! natively, plus the two lookups query analysis runs on every call site:
//! surface token -> canonical identifier (exact match), and aggregation
//! alias -> canonical identifier (case-insensitive).

mod aggregation;
mod builtin;

pub use builtin::{BuiltinFunction, UnknownFunction};
