//! Deterministic stand-in for the text-generation service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

type Responder = dyn Fn(&str, &str) -> Result<String, LlmError> + Send + Sync;

/// Records every `(system, user)` call and answers through a closure.
pub struct StubGenerator {
    responder: Box<Responder>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubGenerator {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&str, &str) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Always answers with the same text.
    pub fn fixed(text: &str) -> Arc<Self> {
        let text = text.to_string();
        Self::new(move |_, _| Ok(text.clone()))
    }

    /// Always fails as an unauthorized upstream would.
    pub fn failing() -> Arc<Self> {
        Self::new(|_, _| {
            Err(LlmError::Api {
                status: 401,
                message: "Invalid API Key".to_string(),
            })
        })
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        (self.responder)(system, user)
    }
}
