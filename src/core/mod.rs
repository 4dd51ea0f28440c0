pub mod aggregate;
pub mod engine;

pub use crate::domain::model::{Department, Employee, Project, ReportRow};
pub use crate::domain::ports::{ConfigProvider, DataSource};
pub use crate::utils::error::Result;
