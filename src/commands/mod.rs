//! HTTP Command Wrappers
//!
//! Frontend bindings to the bulk-products endpoints, organized by domain.

mod csrf;
mod locations;
mod products;

pub use csrf::*;
pub use locations::*;
pub use products::*;
