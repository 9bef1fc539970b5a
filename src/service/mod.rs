//! Service layer module.
//!
//! Contains the logic that sits between HTTP handlers and the form state.

pub mod generator;

pub use generator::GeneratorService;
