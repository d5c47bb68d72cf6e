//! Shared types and models for the Plant Care Platform
//!
//! This crate contains the domain logic shared between the backend and the
//! browser client (via WASM), including the climate suitability scorer.

pub mod models;
pub mod translation;
pub mod types;
pub mod validation;

pub use models::*;
pub use translation::*;
pub use types::*;
pub use validation::*;
