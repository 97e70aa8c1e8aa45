//! Configuration for the bgdict service.

mod settings;

pub use settings::*;
