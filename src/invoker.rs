use crate::{GenerateResponse, InvokeError, InvokerConfig};
use reqwest::StatusCode;
use std::io::Write;
use tracing::{debug, warn};

/// What the endpoint said, after it has been printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(String),
    Rejected { status: u16, body: String },
}

pub struct Invoker {
    client: reqwest::Client,
    config: InvokerConfig,
}

impl Invoker {
    pub fn new(config: InvokerConfig) -> Result<Self, InvokeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(InvokeError::Client)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &InvokerConfig {
        &self.config
    }

    /// Sends the generate request once and prints the result to `out`.
    ///
    /// Anything other than a 200 is reported on `out` and returned as
    /// [`Outcome::Rejected`]. A 200 whose body is not JSON, or has no string
    /// `response`, is an error.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Outcome, InvokeError> {
        let creds = &self.config.credentials;
        debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            "sending generate request"
        );

        let res = self
            .client
            .post(&self.config.endpoint)
            .basic_auth(&creds.username, Some(&creds.password))
            .json(&self.config.request_body())
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "generate request rejected");
            writeln!(out, "Error: {}", status.as_u16())?;
            writeln!(out, "{text}")?;
            return Ok(Outcome::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        let body: serde_json::Value = serde_json::from_str(&text)?;
        let GenerateResponse { response } =
            serde_json::from_value(body).map_err(|_| InvokeError::MissingField("response"))?;
        debug!(chars = response.len(), "generate request succeeded");

        writeln!(out, "{response}")?;
        Ok(Outcome::Generated(response))
    }
}

/// Runs a single invocation against `config`, printing to stdout.
pub async fn run(config: InvokerConfig) -> Result<Outcome, InvokeError> {
    let invoker = Invoker::new(config)?;
    invoker.run(&mut std::io::stdout()).await
}
