use crate::domain::model::{Department, Employee, Project};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DataSource: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>>;
    async fn list_departments(&self) -> Result<Vec<Department>>;
    async fn list_projects(&self) -> Result<Vec<Project>>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn retry_attempts(&self) -> u32;
    fn retry_delay_seconds(&self) -> u64;
    fn output_format(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn include_manager_id(&self) -> bool;
}
