//! Dictionary domain: types, row normalization and word resolution.

pub mod batch;
pub mod normalize;
mod resolver;
mod types;

pub use resolver::WordResolver;
pub use types::*;
