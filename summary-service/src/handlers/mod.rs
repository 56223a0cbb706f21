//! HTTP handlers for the summary service.

pub mod health;
pub mod summary;
