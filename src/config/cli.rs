use crate::core::client::DEFAULT_METHOD;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "rec-client")]
#[command(about = "A small client for a product recommendation API")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:5000")]
    pub base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch recommendations for a user
    Recommend {
        /// Opaque user identifier, passed through to the service
        user_id: String,

        #[arg(long, default_value = DEFAULT_METHOD)]
        method: String,

        #[arg(long, help = "Number of recommendations to request")]
        count: Option<usize>,
    },
    /// Fetch aggregate service statistics
    Stats,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn default_method(&self) -> &str {
        match &self.command {
            Command::Recommend { method, .. } => method,
            Command::Stats => DEFAULT_METHOD,
        }
    }

    fn recommendation_count(&self) -> Option<usize> {
        match &self.command {
            Command::Recommend { count, .. } => *count,
            Command::Stats => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;

        if let Command::Recommend {
            user_id,
            method,
            count,
        } = &self.command
        {
            validate_non_empty_string("user_id", user_id)?;
            validate_non_empty_string("method", method)?;
            if let Some(n) = count {
                validate_range("count", *n, 1, 100)?;
            }
        }

        Ok(())
    }
}
