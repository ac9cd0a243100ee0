//! Everything the invoker needs to know about the call it makes.

use crate::GenerateRequest;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://nodemand.las.iastate.edu/ollama/api/generate";
pub const DEFAULT_USERNAME: &str = "tracweb-education";
pub const DEFAULT_MODEL: &str = "deepseek-r1:70b";
pub const DEFAULT_PROMPT: &str = "list the funniest atomic element names";

/// Basic auth pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct InvokerConfig {
    pub endpoint: String,
    pub credentials: Credentials,
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    /// `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
}

impl InvokerConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credentials,
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            stream: false,
            timeout: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn request_body(&self) -> GenerateRequest {
        GenerateRequest {
            model: self.model.clone(),
            prompt: self.prompt.clone(),
            stream: self.stream,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_call() {
        let config = InvokerConfig::new(Credentials::new(DEFAULT_USERNAME, "pw"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.credentials.username, "tracweb-education");
        assert!(!config.stream);
        assert!(config.timeout.is_none());
        assert_eq!(
            config.request_body(),
            GenerateRequest {
                model: "deepseek-r1:70b".to_string(),
                prompt: "list the funniest atomic element names".to_string(),
                stream: false,
            }
        );
    }

    #[test]
    fn overrides_replace_single_fields() {
        let config = InvokerConfig::new(Credentials::new("u", "p"))
            .with_endpoint("http://localhost:11434/api/generate")
            .with_model("llama3")
            .with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(config.endpoint, "http://localhost:11434/api/generate");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("alice", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("alice"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));

        let config = InvokerConfig::new(creds);
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
