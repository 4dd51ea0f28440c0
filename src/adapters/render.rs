use crate::domain::model::ReportRow;
use crate::utils::error::{ReportError, Result};
use serde::Serialize;
use std::fmt::Write as _;

pub const NO_RESULTS_NOTICE: &str = "No managers found with more than 1 project.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn parse(field_name: &str, value: &str) -> Result<Self> {
        match value {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(ReportError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: table, csv, json".to_string(),
            }),
        }
    }
}

/// Renders the ordered rows in the requested format. Pure: rows in, text out.
pub fn render(rows: &[ReportRow], format: OutputFormat, include_manager_id: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Csv => render_csv(rows, include_manager_id),
        OutputFormat::Json => render_json(rows, include_manager_id),
    }
}

fn render_table(rows: &[ReportRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_RESULTS_NOTICE);
    }

    let mut out = String::new();
    out.push_str("Manager\tProjects\tDepartment\n");
    for r in rows {
        let _ = writeln!(out, "{}\t{}\t{}", r.manager_name, r.project_count, r.department);
    }
    out
}

fn render_csv(rows: &[ReportRow], include_manager_id: bool) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if include_manager_id {
        writer.write_record(["manager_name", "manager_id", "project_count", "department"])?;
        for r in rows {
            writer.write_record([
                r.manager_name.clone(),
                r.manager_id.to_string(),
                r.project_count.to_string(),
                r.department.clone(),
            ])?;
        }
    } else {
        writer.write_record(["manager_name", "project_count", "department"])?;
        for r in rows {
            writer.write_record([
                r.manager_name.clone(),
                r.project_count.to_string(),
                r.department.clone(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))?;
    String::from_utf8(bytes)
        .map_err(|e| ReportError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))
}

#[derive(Serialize)]
struct JsonRow<'a> {
    manager_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    manager_id: Option<i64>,
    project_count: usize,
    department: &'a str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    rows: Vec<JsonRow<'a>>,
}

fn render_json(rows: &[ReportRow], include_manager_id: bool) -> Result<String> {
    let report = JsonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        rows: rows
            .iter()
            .map(|r| JsonRow {
                manager_name: &r.manager_name,
                manager_id: include_manager_id.then_some(r.manager_id),
                project_count: r.project_count,
                department: &r.department,
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
