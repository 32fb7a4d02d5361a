use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsRequest {
    pub name: String,
}

impl DetailsRequest {
    /// Reads a non-empty string `name` from a parsed body. Missing, `null`,
    /// non-string and empty values are all treated as absent.
    pub fn from_json(body: &Value) -> Option<Self> {
        body.get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(|name| Self {
                name: name.to_string(),
            })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
