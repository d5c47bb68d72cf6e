//! Domain models for the Plant Care Platform

mod suitability;
mod weather;

pub use suitability::*;
pub use weather::*;
