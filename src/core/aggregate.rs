use crate::domain::model::{Department, Employee, Project, ReportRow};
use std::collections::HashMap;

/// Builds the ranked manager report from the three raw collections.
///
/// A department produces a row only when it owns more than one project and
/// its manager id resolves to a known employee; anything else is silently
/// skipped. Rows are ordered by project count descending, then manager name
/// ascending. The sort is stable, so rows equal on both keys keep the input
/// department order.
pub fn build_report(
    employees: &[Employee],
    departments: &[Department],
    projects: &[Project],
) -> Vec<ReportRow> {
    // 建立 employee id -> employee 查找表
    let employee_by_id: HashMap<i64, &Employee> =
        employees.iter().map(|e| (e.id, e)).collect();

    // 統計每個部門的專案數
    let mut project_count_by_dept: HashMap<i64, usize> = HashMap::new();
    for p in projects {
        *project_count_by_dept.entry(p.department_id).or_insert(0) += 1;
    }

    let mut rows = Vec::new();
    for d in departments {
        let count = project_count_by_dept.get(&d.id).copied().unwrap_or(0);
        if count <= 1 {
            continue; // only managers with > 1 project
        }

        let manager = match employee_by_id.get(&d.manager_id) {
            Some(m) => m,
            None => continue, // skip if manager missing
        };

        rows.push(ReportRow {
            manager_name: manager.name.clone(),
            manager_id: manager.id,
            project_count: count,
            department: d.name.clone(),
        });
    }

    rows.sort_by(|a, b| {
        b.project_count
            .cmp(&a.project_count)
            .then_with(|| a.manager_name.cmp(&b.manager_name))
    });

    rows
}
