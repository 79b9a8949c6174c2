//! Fetch one place's details and print the decoded response as JSON.
//!
//! ```text
//! place-details <PLACE_ID> [--language en] [--extensions review_summary]
//!               [--fields name,rating] [--region fr]
//!               [--key KEY] [--base-url URL] [--timeout-secs N]
//! ```
//!
//! The key, base URL and timeout fall back to `PLACES_API_KEY`,
//! `PLACES_BASE_URL` and `PLACES_TIMEOUT_SECS`.

use std::process::ExitCode;

use clap::Parser;
use places_core::config::{API_KEY_VAR, BASE_URL_VAR, TIMEOUT_VAR};
use places_core::{ApiError, ConfigError, Service, ServiceConfig};

#[derive(Parser)]
#[command(name = "place-details", about = "Look up a place by its place ID")]
struct Cli {
    /// Place ID to look up
    place_id: String,

    /// Language code for localized results
    #[arg(long)]
    language: Option<String>,

    /// Extra result sections, e.g. review_summary
    #[arg(long)]
    extensions: Option<String>,

    /// Restrict the result to these fields
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,

    /// Region code used to bias formatting
    #[arg(long)]
    region: Option<String>,

    /// API key [env: PLACES_API_KEY]
    #[arg(long)]
    key: Option<String>,

    /// Base URL of the places API [env: PLACES_BASE_URL]
    #[arg(long)]
    base_url: Option<String>,

    /// Give up on the request after this many seconds [env: PLACES_TIMEOUT_SECS]
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl Cli {
    /// Flags win over `env`; both go through `ServiceConfig::from_lookup`.
    fn config<F>(&self, env: F) -> Result<ServiceConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        ServiceConfig::from_lookup(|name| {
            let flag = match name {
                API_KEY_VAR => self.key.clone(),
                BASE_URL_VAR => self.base_url.clone(),
                TIMEOUT_VAR => self.timeout_secs.map(|secs| secs.to_string()),
                _ => None,
            };
            flag.or_else(|| env(name))
        })
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config(|name| std::env::var(name).ok())?;
    log::debug!("using {config:?}");
    let service = Service::from_config(&config);

    let mut call = service.details(&cli.place_id).fields(cli.fields.iter().cloned());
    if let Some(language) = &cli.language {
        call = call.language(language);
    }
    if let Some(extensions) = &cli.extensions {
        call = call.extensions(extensions);
    }
    if let Some(region) = &cli.region {
        call = call.region(region);
    }

    let details = call.send()?;
    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(ApiError::Api(status)) = e.downcast_ref::<ApiError>() {
                log::error!("place details failed with API status {status}");
            }
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
