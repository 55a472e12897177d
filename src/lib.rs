//! Purpose: Chained, fail-soft navigation and type coercion over untyped JSON.
//! Exports: `Json` (owned document), `JsonRef` (borrowed view), `Error`.
//! Role: Library for reading loosely-structured JSON (configs, API responses)
//! without declaring data structures up front; parsing is delegated to serde_json.
//! Invariants: Navigation collapses misses into null-ish views, never errors.
//! Invariants: Coercion accessors propagate type mismatches; only the `must_`
//! family substitutes defaults.

pub mod api;
mod core;

pub use api::{Error, ErrorKind, Json, JsonRef, Target};

/// The crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
