pub mod providers;

pub use providers::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
