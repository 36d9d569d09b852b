//! Report module - summarizing filter results

pub mod summary;
pub mod variance_export;

pub use summary::*;
pub use variance_export::*;
