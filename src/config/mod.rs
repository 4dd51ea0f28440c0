pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "org-report")]
#[command(about = "Ranks managers by how many projects their department owns")]
pub struct CliConfig {
    /// Base URL of the organization data service
    #[arg(long, default_value = "http://localhost:8000")]
    pub endpoint: String,

    /// Per-request timeout so the client won't hang forever
    #[arg(long, default_value = "5")]
    pub timeout_seconds: u64,

    /// Number of retries after a failed request
    #[arg(long, default_value = "0")]
    pub retry_attempts: u32,

    /// Delay between retries
    #[arg(long, default_value = "1")]
    pub retry_delay_seconds: u64,

    /// Output format: table, csv or json
    #[arg(long, default_value = "table")]
    pub format: String,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Include the manager id column in the output
    #[arg(long)]
    pub include_manager_id: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory usage during the run")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    fn retry_delay_seconds(&self) -> u64 {
        self.retry_delay_seconds
    }

    fn output_format(&self) -> &str {
        &self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn include_manager_id(&self) -> bool {
        self.include_manager_id
    }
}

impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::utils::validation::validate_url("endpoint", &self.endpoint)?;
        crate::utils::validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        crate::utils::validation::validate_output_format("format", &self.format)?;
        if let Some(path) = &self.output {
            crate::utils::validation::validate_non_empty_string("output", path)?;
        }
        Ok(())
    }
}
