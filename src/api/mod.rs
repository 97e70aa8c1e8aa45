//! REST API module for bgdict.
//!
//! Exposes word resolution over HTTP with the routes of the original
//! lookup service.

mod handlers;
mod rest;

pub use handlers::*;
pub use rest::*;
