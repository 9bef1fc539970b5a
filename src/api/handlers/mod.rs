//! HTTP request handlers.

pub mod api;
pub mod form;
pub mod health;
