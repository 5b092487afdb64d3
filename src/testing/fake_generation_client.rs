use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{GenerationClient, GenerationRequest, require_credential};

/// Records every request and answers with a canned response.
#[derive(Clone)]
pub struct FakeGenerationClient {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    response: Result<String, String>,
}

impl FakeGenerationClient {
    pub fn responding(text: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: Ok(text.into()) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: Err(message.into()) }
    }

    pub fn recorded(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: &GenerationRequest, credential: &str) -> Result<String, AppError> {
        require_credential(credential)?;
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone().map_err(AppError::RemoteGeneration)
    }
}
