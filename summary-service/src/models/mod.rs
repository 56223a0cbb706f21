//! Request/response types for the summary endpoint.

pub mod summary;

pub use summary::{SummaryRequest, SummaryResponse, PROMPT_REQUIRED, SUMMARY_GENERATION};
