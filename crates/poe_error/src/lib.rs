//! Error types for the Poe API client library.
//!
//! Two error kinds cover the whole client surface: [`ConfigurationError`]
//! for construction-time credential problems and [`RequestError`] for
//! anything that goes wrong during a request.

mod config;
mod request;

pub use config::ConfigurationError;
pub use request::RequestError;
