// Core modules implementing the value wrapper, loading, and error modeling.
pub mod error;
pub mod loader;
pub mod value;
