//! Conformance checks on strings used throughout RDAP data.
pub mod string;

#[doc(inline)]
pub use string::*;
