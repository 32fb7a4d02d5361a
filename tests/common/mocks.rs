use async_trait::async_trait;
use restaurant_details::{
    Error, Result,
    gemini::{GenerateContentRequest, GenerationClient},
};
use serde_json::{Value, json};
use std::sync::Mutex;

/// Canned result for one outbound call
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Success(Value),
    Upstream(u16, String),
    Failure(String),
}

/// Recorded outbound call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub api_key: String,
    pub request: GenerateContentRequest,
}

/// Mock generation client recording every call it receives
#[derive(Debug)]
pub struct MockGenerationClient {
    outcomes: Mutex<Vec<MockOutcome>>,
    fallback: MockOutcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self::returning(MockOutcome::Success(create_mock_upstream_response("{}")))
    }

    /// Every call yields `outcome` unless a queued outcome is pending
    pub fn returning(outcome: MockOutcome) -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            fallback: outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_outcomes(self, outcomes: Vec<MockOutcome>) -> Self {
        *self.outcomes.lock().unwrap() = outcomes;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: api_key.to_string(),
            request: request.clone(),
        });

        let outcome = {
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                self.fallback.clone()
            } else {
                outcomes.remove(0)
            }
        };

        match outcome {
            MockOutcome::Success(body) => Ok(body),
            MockOutcome::Upstream(status, body) => Err(Error::upstream(status, body)),
            MockOutcome::Failure(message) => Err(Error::internal(message)),
        }
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Upstream envelope wrapping `text` the way generateContent does
pub fn create_mock_upstream_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 112,
            "candidatesTokenCount": 240,
            "totalTokenCount": 352
        },
        "modelVersion": "gemini-2.5-flash-preview-05-20"
    })
}

pub fn create_mock_details_text(name: &str) -> String {
    json!({
        "name": name,
        "cuisine": "Indian",
        "cost": "££",
        "rating": "4.5",
        "whyGo": "Bombay café classics",
        "nonVeg": ["Black daal", "Chicken ruby"],
        "veg": ["Okra fries"],
        "maps": "",
        "insta": "",
        "lat": 51.5136,
        "lng": -0.1269,
        "tags": ["breakfast", "group-friendly"],
        "image": ""
    })
    .to_string()
}
