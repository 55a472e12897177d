//! Purpose: Define the stable public API boundary for loosejson.
//! Exports: The wrapper types, views, and error model callers need.
//! Role: Public, additive-only surface; implementation modules stay internal.
//! Invariants: This module is the only public path to the core types.

pub use crate::core::error::{Error, ErrorKind, Target};
pub use crate::core::loader::read_commented_json;
pub use crate::core::value::{Json, JsonRef};
