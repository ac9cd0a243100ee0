use clap::Parser;
use generate_invoke::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_PROMPT, DEFAULT_USERNAME};
use generate_invoke::{Credentials, InvokerConfig};
use std::{error::Error, time::Duration};
use tracing_subscriber::EnvFilter;

/// Send one prompt to an Ollama generate endpoint and print the reply.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Generate endpoint URL.
    #[arg(long, env = "GENERATE_URL", default_value = DEFAULT_ENDPOINT)]
    url: String,

    /// Basic auth username.
    #[arg(long, env = "GENERATE_USERNAME", default_value = DEFAULT_USERNAME)]
    username: String,

    /// Basic auth password.
    #[arg(long, env = "GENERATE_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long, env = "GENERATE_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, env = "GENERATE_PROMPT", default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Give up after this many seconds. Waits forever when unset.
    #[arg(long, env = "GENERATE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

impl Cli {
    fn into_config(self) -> InvokerConfig {
        InvokerConfig::new(Credentials::new(self.username, self.password))
            .with_endpoint(self.url)
            .with_model(self.model)
            .with_prompt(self.prompt)
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let config = Cli::parse().into_config();
    generate_invoke::run(config).await?;
    Ok(())
}
