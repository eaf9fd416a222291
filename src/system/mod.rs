//! System-level modules
//!
//! Process-wide concerns shared by the CLI and the library: logging setup.

pub mod logging;

pub use logging::init_logging;
