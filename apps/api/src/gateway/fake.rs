//! Scriptable in-memory gateway for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::gateway::{GatewayError, TextGateway};

#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Fail,
}

#[derive(Debug)]
pub struct FakeGateway {
    declaration: Reply,
    languages: Reply,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakeGateway {
    pub fn new(declaration: Reply, languages: Reply) -> Self {
        Self {
            declaration,
            languages,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(declaration: &str, languages: &str) -> Self {
        Self::new(
            Reply::Text(declaration.to_string()),
            Reply::Text(languages.to_string()),
        )
    }

    pub fn failing() -> Self {
        Self::new(Reply::Fail, Reply::Fail)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn answer(&self, reply: &Reply) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(GatewayError::Llm(crate::llm_client::LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })),
        }
    }
}

#[async_trait]
impl TextGateway for FakeGateway {
    async fn improve_declaration(&self, _declaration: &str) -> Result<String, GatewayError> {
        self.answer(&self.declaration).await
    }

    async fn standardize_languages(&self, _languages: &str) -> Result<String, GatewayError> {
        self.answer(&self.languages).await
    }
}
