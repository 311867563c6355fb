//! GeoPlaces Store - Storage ports and adapters
//!
//! This crate defines the document-store port for places and the
//! relational-store port for states and cities, with in-memory adapters
//! and the demo sample data set.

pub mod memory;
pub mod ports;
pub mod sample;
