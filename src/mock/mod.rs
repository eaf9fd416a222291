//! Synthetic short link data
//!
//! - `generator`: single fabricated records with random expiry
//! - `query`: paged, optionally sorted listings built from the generator

mod generator;
mod query;

pub use generator::{MockLinkGenerator, SHORT_URL_BASE};
pub use query::QuerySimulator;
