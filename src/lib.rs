pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::HttpDataSource;
pub use crate::adapters::render::OutputFormat;
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{aggregate::build_report, engine::ReportEngine};
pub use crate::domain::model::{Department, Employee, Project, ReportRow};
pub use crate::utils::error::{ReportError, Result};
