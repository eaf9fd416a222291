//! quanklink - short link client and console
//!
//! Create, list, update and delete short links against either a local mock
//! backend (fabricated records, fixed latency) or the remote REST API.
//!
//! # Architecture
//! - `models`: short link record, query parameters, request payloads
//! - `mock`: record generator and paged query simulator
//! - `backend`: `LinkBackend` trait with mock and HTTP implementations
//! - `api`: response envelope, panel facades, HTTP client, dev proxy
//! - `session`: explicit credential store shared by guard and client
//! - `router`: route table and navigation guard
//! - `cli`, `interfaces`: command-line front end (feature `cli`)
//! - `config`, `system`, `errors`: ambient configuration, logging and errors

pub mod api;
pub mod backend;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod context;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod mock;
pub mod models;
pub mod router;
pub mod session;
pub mod system;
pub mod utils;
