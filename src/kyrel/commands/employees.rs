use serde::{Deserialize, Serialize};

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Attendance, Employee, Leave};
use crate::store::DataStore;

use super::helpers::{load_document, require_text};

/// An employee with what they have sold.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeReport {
    pub employee: Employee,
    pub invoices: usize,
    pub sales_total: f64,
}

/// Staff data imported in bulk: employees plus their attendance and leave
/// records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub attendance: Vec<Attendance>,
    #[serde(default)]
    pub leaves: Vec<Leave>,
}

pub fn find<S: DataStore>(store: &S, badge: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let doc = load_document(store, &mut result);

    match doc.employee(badge) {
        Some(employee) => Ok(result.with_employees(vec![employee.clone()])),
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Employee with badge {} not found",
                badge.trim().to_uppercase()
            )));
            Ok(result)
        }
    }
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let doc = load_document(store, &mut result);
    if doc.employees.is_empty() {
        result.add_message(CmdMessage::info("No employees registered"));
    }
    Ok(result.with_employees(doc.employees))
}

pub fn report<S: DataStore>(store: &S, badge: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let doc = load_document(store, &mut result);

    let Some(employee) = doc.employee(badge).cloned() else {
        result.add_message(CmdMessage::warning(format!(
            "Employee with badge {} not found",
            badge.trim().to_uppercase()
        )));
        return Ok(result);
    };
    let sales: Vec<_> = doc
        .sales
        .iter()
        .filter(|s| employee.has_badge(&s.employee_badge))
        .collect();
    result.employee_report = Some(EmployeeReport {
        employee: employee.clone(),
        invoices: sales.len(),
        sales_total: sales.iter().map(|s| s.total).sum(),
    });
    Ok(result.with_employees(vec![employee]))
}

/// Add employees whose badges are not yet known, along with the roster's
/// attendance and leave records.
pub fn seed<S: DataStore>(store: &mut S, roster: Roster) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut doc = load_document(store, &mut result);

    let mut added = Vec::new();
    for mut employee in roster.employees {
        employee.badge = require_text(&employee.badge, "Employee badge")?.to_uppercase();
        if doc.employee(&employee.badge).is_some() {
            result.add_message(CmdMessage::warning(format!(
                "Badge {} already registered, skipped",
                employee.badge
            )));
            continue;
        }
        doc.employees.push(employee.clone());
        added.push(employee);
    }
    let attendance = roster.attendance.len();
    let leaves = roster.leaves.len();
    doc.attendance
        .extend(roster.attendance.into_iter().map(|mut a| {
            a.employee_badge = a.employee_badge.trim().to_uppercase();
            a
        }));
    doc.leaves.extend(roster.leaves.into_iter().map(|mut l| {
        l.employee_badge = l.employee_badge.trim().to_uppercase();
        l
    }));

    store.save(&doc)?;
    tracing::info!(employees = added.len(), attendance, leaves, "roster imported");

    result.add_message(CmdMessage::success(format!(
        "Added {} employees, {} attendance records, {} leaves",
        added.len(),
        attendance,
        leaves
    )));
    Ok(result.with_employees(added))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sale;
    use crate::model::Location;
    use crate::store::memory::fixtures::stocked_store;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn find_is_case_insensitive() {
        let store = stocked_store();
        let result = find(&store, "e1").unwrap();
        assert_eq!(result.employees.len(), 1);
        assert_eq!(result.employees[0].name, "Ana Torres");
    }

    #[test]
    fn find_unknown_is_empty() {
        let result = find(&stocked_store(), "zz").unwrap();
        assert!(result.employees.is_empty());
        assert_eq!(result.messages[0].content, "Employee with badge ZZ not found");
    }

    #[test]
    fn list_on_empty_store() {
        let result = list(&InMemoryStore::new()).unwrap();
        assert!(result.employees.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn report_sums_sales() {
        let mut store = stocked_store();
        let date = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
        sale::run(&mut store, "Luis", "E1", 1, 2, date).unwrap();
        sale::run(&mut store, "Mara", "e1", 1, 1, date).unwrap();

        let report = report(&store, "E1").unwrap().employee_report.unwrap();
        assert_eq!(report.invoices, 2);
        assert_eq!(report.employee.sales_count, 2);
        assert!((report.sales_total - 3.0 * 9.99).abs() < 1e-9);
    }

    #[test]
    fn seed_skips_known_badges() {
        let mut store = stocked_store();
        let roster = Roster {
            employees: vec![
                Employee::new("e1", "Duplicate", Location::South),
                Employee::new("E2", "Bruno Diaz", Location::South),
            ],
            attendance: vec![Attendance {
                employee_badge: "e2".into(),
                date: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
                present: true,
            }],
            leaves: vec![],
        };

        let result = seed(&mut store, roster).unwrap();
        assert_eq!(result.employees.len(), 1);

        let doc = store.snapshot();
        assert_eq!(doc.employees.len(), 2);
        assert_eq!(doc.employees[0].name, "Ana Torres");
        assert_eq!(doc.attendance[0].employee_badge, "E2");
    }
}
