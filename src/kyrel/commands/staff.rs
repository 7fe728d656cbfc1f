use std::collections::BTreeMap;

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Location;
use crate::store::DataStore;

use super::helpers::load_document;

#[derive(Debug, Clone, PartialEq)]
pub struct StaffSummary {
    pub employees: usize,
    pub leaves: usize,
    pub absences: usize,
    /// Percentage of attendance records marked present, per location.
    /// Locations without records are left out.
    pub attendance_rate: Vec<(Location, f64)>,
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let doc = load_document(store, &mut result);

    let mut per_location: BTreeMap<Location, (u32, u32)> = BTreeMap::new();
    for record in &doc.attendance {
        let Some(employee) = doc.employee(&record.employee_badge) else {
            continue;
        };
        let (total, present) = per_location.entry(employee.location).or_default();
        *total += 1;
        if record.present {
            *present += 1;
        }
    }

    result.staff = Some(StaffSummary {
        employees: doc.employees.len(),
        leaves: doc.leaves.len(),
        absences: doc.attendance.iter().filter(|a| !a.present).count(),
        attendance_rate: per_location
            .into_iter()
            .map(|(loc, (total, present))| (loc, f64::from(present) / f64::from(total) * 100.0))
            .collect(),
    });
    Ok(result)
}
