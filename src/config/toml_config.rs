use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportConfig,
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
    pub include_manager_id: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReportError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            crate::utils::validation::validate_positive_number(
                "source.timeout_seconds",
                timeout,
                1,
            )?;
        }

        crate::utils::validation::validate_output_format("output.format", self.output_format())?;

        if let Some(path) = &self.output.path {
            crate::utils::validation::validate_non_empty_string("output.path", path)?;
        }

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn headers(&self) -> HashMap<String, String> {
        self.source.headers.clone().unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(5)
    }

    fn retry_attempts(&self) -> u32 {
        self.source.retry_attempts.unwrap_or(0)
    }

    fn retry_delay_seconds(&self) -> u64 {
        self.source.retry_delay_seconds.unwrap_or(1)
    }

    fn output_format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("table")
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn include_manager_id(&self) -> bool {
        self.output.include_manager_id.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[report]
name = "engineering-managers"
description = "Managers ranked by department project count"
version = "1.0"

[source]
endpoint = "http://localhost:8000"
timeout_seconds = 5

[output]
format = "table"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.report.name, "engineering-managers");
        assert_eq!(config.endpoint(), "http://localhost:8000");
        assert_eq!(config.timeout_seconds(), 5);
        assert_eq!(config.output_format(), "table");
        assert!(!config.include_manager_id());
    }

    #[test]
    fn test_defaults_apply_when_fields_missing() {
        let toml_content = r#"
[report]
name = "test"
description = "test"
version = "1.0"

[source]
endpoint = "http://localhost:8000"

[output]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.timeout_seconds(), 5);
        assert_eq!(config.retry_attempts(), 0);
        assert_eq!(config.retry_delay_seconds(), 1);
        assert_eq!(config.output_format(), "table");
        assert!(config.output_path().is_none());
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_REPORT_ENDPOINT", "https://org.example.com");

        let toml_content = r#"
[report]
name = "test"
description = "test"
version = "1.0"

[source]
endpoint = "${TEST_REPORT_ENDPOINT}"

[output]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "https://org.example.com");

        std::env::remove_var("TEST_REPORT_ENDPOINT");
    }

    #[test]
    fn test_config_validation_rejects_bad_endpoint() {
        let toml_content = r#"
[report]
name = "test"
description = "test"
version = "1.0"

[source]
endpoint = "invalid-url"

[output]
format = "table"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_format() {
        let toml_content = r#"
[report]
name = "test"
description = "test"
version = "1.0"

[source]
endpoint = "http://localhost:8000"

[output]
format = "xml"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[report]
name = "file-test"
description = "File test"
version = "1.0"

[source]
endpoint = "http://localhost:8000"
retry_attempts = 2
retry_delay_seconds = 3

[output]
format = "csv"
include_manager_id = true

[monitoring]
enabled = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.report.name, "file-test");
        assert_eq!(config.retry_attempts(), 2);
        assert_eq!(config.retry_delay_seconds(), 3);
        assert!(config.include_manager_id());
        assert!(config.monitoring_enabled());
    }
}
