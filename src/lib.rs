use serde::{Deserialize, Serialize};

pub mod config;
pub mod error;
pub mod invoker;

pub use config::{Credentials, InvokerConfig};
pub use error::InvokeError;
pub use invoker::{Invoker, Outcome, run};

/// Body of a `POST /api/generate` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Decoded 200 body. Only `response` is required; anything else the server
/// sends (model, done, timings) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_all_three_fields() {
        let req = GenerateRequest {
            model: "deepseek-r1:70b".to_string(),
            prompt: "hi".to_string(),
            stream: false,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"model": "deepseek-r1:70b", "prompt": "hi", "stream": false})
        );
    }

    #[test]
    fn response_ignores_extra_fields() {
        let body = r#"{"model":"m","created_at":"2024-01-01T00:00:00Z","response":"Boron","done":true}"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "Boron");
    }
}
