use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{GeneratedImage, GenerationClient, GenerationRequest};

#[derive(Debug, Clone)]
enum Behavior {
    Fail(String),
    Reject(u16, String),
    Panic,
}

/// Records every request and answers with a fixed URL, unless the prompt
/// matches one of the configured failure rules.
#[derive(Clone)]
pub struct FakeGenerationClient {
    pub received: Arc<Mutex<Vec<GenerationRequest>>>,
    pub response_url: String,
    rules: Vec<(String, Behavior)>,
}

impl FakeGenerationClient {
    pub fn new(response_url: impl Into<String>) -> Self {
        Self {
            received: Arc::new(Mutex::new(vec![])),
            response_url: response_url.into(),
            rules: vec![],
        }
    }

    pub fn failing_when_prompt_contains(
        mut self,
        needle: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.rules.push((needle.into(), Behavior::Fail(message.into())));
        self
    }

    /// Answer matching prompts as the HTTP client does for a non-success status.
    pub fn rejecting_when_prompt_contains(
        mut self,
        needle: impl Into<String>,
        status: u16,
        reason: impl Into<String>,
    ) -> Self {
        self.rules.push((needle.into(), Behavior::Reject(status, reason.into())));
        self
    }

    pub fn panicking_when_prompt_contains(mut self, needle: impl Into<String>) -> Self {
        self.rules.push((needle.into(), Behavior::Panic));
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: GenerationRequest) -> Result<GeneratedImage, AppError> {
        let behavior = self
            .rules
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle.as_str()))
            .map(|(_, behavior)| behavior.clone());
        self.received.lock().unwrap().push(request);

        match behavior {
            Some(Behavior::Fail(message)) => Err(AppError::Generation(message)),
            Some(Behavior::Reject(status, reason)) => {
                Err(AppError::GenerationRejected { status, reason })
            }
            Some(Behavior::Panic) => panic!("generation backend crashed"),
            None => Ok(GeneratedImage { url: self.response_url.clone() }),
        }
    }
}
