//! Core crate types and utilities

pub mod types;
pub mod error;
pub mod config;
pub mod logging;

pub use types::*;
pub use error::Error;
pub use config::{Density, VisibilityConfig};
