//! Presentation attributes for normalized events.
//!
//! Everything here is pure apart from the random row id: formatting failures
//! fall back to the raw value and never surface as errors.

mod classifier;
mod color;
mod format;
mod row_id;
mod types;

#[cfg(test)]
mod tests;

pub use classifier::*;
pub use color::*;
pub use format::*;
pub use row_id::*;
pub use types::*;
