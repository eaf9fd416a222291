//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_gen;
mod links;
mod routing;

pub use config_gen::*;
pub use links::*;
pub use routing::*;
