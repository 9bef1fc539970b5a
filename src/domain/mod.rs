//! Domain models for the ID generator form.
//!
//! This module contains the form state, identifier formatting, raw input
//! parsing and the API contracts.

pub mod dto;
pub mod form;
pub mod identifier;
pub mod input;

pub use dto::{
    ActionForm, ApiResponse, ConfigUpdate, ConfigUpdateRequest, FormAction, FormSnapshot,
    IdsResponse, RawField, SpecificRequest,
};
pub use form::IdGeneratorForm;
pub use identifier::{IdFormat, zero_pad};
pub use input::{parse_integer, parse_positive};
