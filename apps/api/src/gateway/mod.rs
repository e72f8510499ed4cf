//! Text-improvement gateway, the boundary to the generative-text service.
//!
//! The core only needs two unreliable string rewrites. [`TextGateway`] is the
//! seam; [`LlmGateway`] is the production implementation and
//! [`DisabledGateway`] stands in when no API key is configured.

pub mod enrich;
#[cfg(test)]
pub mod fake;
pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::prompts::PLAIN_TEXT_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

pub use enrich::{enrich, FieldOutcome};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("text improvement is not configured")]
    Disabled,

    #[error("text improvement timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("text improvement returned an empty result")]
    EmptyResponse,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

#[async_trait]
pub trait TextGateway: Send + Sync {
    /// Rewrites the declaration paragraph.
    async fn improve_declaration(&self, declaration: &str) -> Result<String, GatewayError>;

    /// Normalizes a comma-delimited list of languages.
    async fn standardize_languages(&self, languages: &str) -> Result<String, GatewayError>;
}

#[derive(Clone)]
pub struct LlmGateway {
    llm: LlmClient,
}

impl LlmGateway {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextGateway for LlmGateway {
    async fn improve_declaration(&self, declaration: &str) -> Result<String, GatewayError> {
        let prompt = prompts::improve_declaration_prompt(declaration);
        Ok(self.llm.complete(&prompt, PLAIN_TEXT_SYSTEM).await?)
    }

    async fn standardize_languages(&self, languages: &str) -> Result<String, GatewayError> {
        let prompt = prompts::standardize_languages_prompt(languages);
        Ok(self.llm.complete(&prompt, PLAIN_TEXT_SYSTEM).await?)
    }
}

/// Fails every call. Used when the service runs without an API key.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGateway;

#[async_trait]
impl TextGateway for DisabledGateway {
    async fn improve_declaration(&self, _declaration: &str) -> Result<String, GatewayError> {
        Err(GatewayError::Disabled)
    }

    async fn standardize_languages(&self, _languages: &str) -> Result<String, GatewayError> {
        Err(GatewayError::Disabled)
    }
}
