use crate::core::aggregate::build_report;
use crate::domain::model::ReportRow;
use crate::domain::ports::DataSource;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ReportEngine<S: DataSource> {
    source: S,
    monitor: SystemMonitor,
}

impl<S: DataSource> ReportEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(source: S, monitor_enabled: bool) -> Self {
        Self {
            source,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// 依序抓取三個集合，任何一個失敗就中止整次執行（不做部分聚合）。
    pub async fn run(&self) -> Result<Vec<ReportRow>> {
        tracing::info!("Fetching employees...");
        let employees = self.source.list_employees().await?;
        tracing::info!("Fetched {} employees", employees.len());

        tracing::info!("Fetching departments...");
        let departments = self.source.list_departments().await?;
        tracing::info!("Fetched {} departments", departments.len());

        tracing::info!("Fetching projects...");
        let projects = self.source.list_projects().await?;
        tracing::info!("Fetched {} projects", projects.len());
        self.monitor.log_stats("Fetch");

        tracing::info!("Aggregating report...");
        let rows = build_report(&employees, &departments, &projects);
        tracing::info!("Report contains {} rows", rows.len());
        self.monitor.log_stats("Aggregate");

        self.monitor.log_final_stats();
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Department, Employee, Project};
    use crate::utils::error::ReportError;
    use async_trait::async_trait;

    struct StaticSource {
        employees: Vec<Employee>,
        departments: Vec<Department>,
        projects: Vec<Project>,
    }

    #[async_trait]
    impl DataSource for StaticSource {
        async fn list_employees(&self) -> Result<Vec<Employee>> {
            Ok(self.employees.clone())
        }

        async fn list_departments(&self) -> Result<Vec<Department>> {
            Ok(self.departments.clone())
        }

        async fn list_projects(&self) -> Result<Vec<Project>> {
            Ok(self.projects.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DataSource for FailingSource {
        async fn list_employees(&self) -> Result<Vec<Employee>> {
            Ok(vec![])
        }

        async fn list_departments(&self) -> Result<Vec<Department>> {
            Err(ReportError::SourceError {
                endpoint: "http://localhost:8000/departments".to_string(),
                status: 500,
            })
        }

        async fn list_projects(&self) -> Result<Vec<Project>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_engine_runs_full_flow() {
        let source = StaticSource {
            employees: vec![Employee {
                id: 1,
                name: "Manager A".to_string(),
            }],
            departments: vec![Department {
                id: 10,
                name: "Dept A".to_string(),
                manager_id: 1,
            }],
            projects: vec![
                Project {
                    id: 100,
                    department_id: 10,
                    name: "P1".to_string(),
                },
                Project {
                    id: 101,
                    department_id: 10,
                    name: "P2".to_string(),
                },
            ],
        };

        let engine = ReportEngine::new(source);
        let rows = engine.run().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].manager_name, "Manager A");
    }

    #[tokio::test]
    async fn test_engine_aborts_on_fetch_failure() {
        let engine = ReportEngine::new(FailingSource);
        let result = engine.run().await;

        assert!(result.is_err());
    }
}
