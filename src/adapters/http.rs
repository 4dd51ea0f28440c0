use crate::domain::model::{Department, Employee, Project};
use crate::domain::ports::{ConfigProvider, DataSource};
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

// 伺服器回應是帶巢狀列表欄位的物件，不是裸陣列
#[derive(Debug, Deserialize)]
struct EmployeeListResponse {
    employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
struct DepartmentListResponse {
    departments: Vec<Department>,
}

#[derive(Debug, Deserialize)]
struct ProjectListResponse {
    projects: Vec<Project>,
}

pub struct HttpDataSource {
    client: Client,
    base_url: String,
    timeout: Duration,
    headers: HashMap<String, String>,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl HttpDataSource {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            base_url: config.endpoint().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds()),
            headers: HashMap::new(),
            retry_attempts: config.retry_attempts(),
            retry_delay: Duration::from_secs(config.retry_delay_seconds()),
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    async fn fetch_once<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        // 構建請求
        let mut request = self.client.get(endpoint).timeout(self.timeout);

        // 添加自定義標頭
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        tracing::debug!("📡 GET {}", endpoint);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::SourceError {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// 帶重試的抓取。重試次數用完後回傳最後一次的錯誤。
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let endpoint = format!("{}/{}", self.base_url, path);

        let mut attempt = 0;
        loop {
            match self.fetch_once::<T>(&endpoint).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retry_attempts => {
                    attempt += 1;
                    tracing::warn!(
                        "📡 Request to {} failed ({}), retry {}/{}",
                        endpoint,
                        e,
                        attempt,
                        self.retry_attempts
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let response: EmployeeListResponse = self.fetch_json("employees").await?;
        Ok(response.employees)
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        let response: DepartmentListResponse = self.fetch_json("departments").await?;
        Ok(response.departments)
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let response: ProjectListResponse = self.fetch_json("projects").await?;
        Ok(response.projects)
    }
}
