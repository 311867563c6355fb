//! GeoPlaces Core - Domain models, errors, and configuration
//!
//! This crate holds the record shapes shared by the geo engine, the stores
//! and the command-line front end.

pub mod config;
pub mod error;
pub mod models;

pub use error::{GeoplacesError, Result};
