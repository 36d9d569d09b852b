//! Pipeline module - loading, column lookup and variance filtering

pub mod loader;
pub mod table;
pub mod variance;

pub use loader::*;
pub use table::*;
pub use variance::*;
