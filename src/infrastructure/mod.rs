//! Infrastructure shared by the library and the CLI: configuration
//! loading and tracing setup.

pub mod config;
pub mod logging;
