use secrecy::{ExposeSecret, Secret};
use service_core::config::{self as core_config, get_env, is_production};
use service_core::error::AppError;
use std::env;

use crate::services::providers::gemini::{GeminiConfig, GEMINI_API_BASE};

#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub common: core_config::Config,
    pub gemini: GeminiConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// `*` or a single origin. CORS headers are omitted when unset.
    pub allow_origin: Option<String>,
}

impl SummaryConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = is_production();

        Ok(SummaryConfig {
            common,
            gemini: GeminiConfig {
                // An empty key is tolerated outside prod; provider calls then fail.
                api_key: Secret::new(get_env("GEMINI_API_KEY", Some(""), is_prod)?),
                api_base: get_env("GEMINI_API_BASE", Some(GEMINI_API_BASE), false)?,
            },
            cors: CorsConfig {
                allow_origin: env::var("CORS_ALLOW_ORIGIN")
                    .ok()
                    .filter(|origin| !origin.trim().is_empty()),
            },
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.gemini.api_key.expose_secret().trim().is_empty()
    }
}
