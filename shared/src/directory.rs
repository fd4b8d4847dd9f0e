//! Employee directory projection
//!
//! Derives the rows the staff list renders from a fetched employee
//! collection and the active filter set. Filtering never reorders: the
//! output is a subset of the input in its original relative order, plus
//! derived display-only fields.

use serde::Serialize;

use crate::models::{Campus, Employee, EmployeeType, EmploymentStatus, Section};
use crate::util::capitalize;

/// An "All or one value" filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    /// Keep everything
    #[default]
    All,
    /// Keep only records with this value
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// True when the filter keeps the given value
    pub fn keeps(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == value,
        }
    }
}

/// Active filter values for the employee list
///
/// Ephemeral, client-side state; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    /// Exactly one status is always active; there is no "All" option.
    pub employment_status: EmploymentStatus,
    pub campus: Selection<Campus>,
    pub employee_type: Selection<EmployeeType>,
    /// Only consulted while the employee-type filter is teaching.
    pub section: Selection<Section>,
    /// Free-text name search, matched case-insensitively against
    /// `"<surname> <given_name>"`.
    pub search: String,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            employment_status: EmploymentStatus::Active,
            campus: Selection::All,
            employee_type: Selection::All,
            section: Selection::All,
            search: String::new(),
        }
    }
}

/// Employee record augmented with derived, human-readable fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    #[serde(flatten)]
    pub employee: Employee,
    /// Capitalized "Surname Given_name"
    pub name: String,
    /// Primary number, secondary fallback, or "N/A"
    pub phone: String,
    #[serde(rename = "campusLabel")]
    pub campus_label: String,
    /// Capitalized section or "N/A" for non-teaching staff
    #[serde(rename = "sectionLabel")]
    pub section_label: String,
    #[serde(rename = "employeeTypeLabel")]
    pub employee_type_label: String,
}

/// Project a raw employee collection through the filter set.
///
/// Each stage is an independent predicate; the section stage is skipped
/// entirely unless the list is narrowed to teaching staff, because section
/// is not a meaningful dimension for non-teaching records.
pub fn project(employees: &[Employee], filters: &FilterSet) -> Vec<DisplayRow> {
    let search = filters.search.trim().to_lowercase();

    employees
        .iter()
        .filter(|e| e.employment_status == filters.employment_status)
        .filter(|e| filters.campus.keeps(e.campus))
        .filter(|e| filters.employee_type.keeps(e.assignment.employee_type()))
        .filter(|e| {
            if filters.employee_type != Selection::Only(EmployeeType::Teaching) {
                return true;
            }
            match e.assignment.section() {
                Some(section) => filters.section.keeps(section),
                None => filters.section == Selection::All,
            }
        })
        .filter(|e| {
            if search.is_empty() {
                return true;
            }
            let full_name = format!("{} {}", e.surname, e.given_name).to_lowercase();
            full_name.contains(&search)
        })
        .map(derive_row)
        .collect()
}

fn derive_row(employee: &Employee) -> DisplayRow {
    let phone = if !employee.telephone_number1.is_empty() {
        employee.telephone_number1.clone()
    } else {
        employee
            .telephone_number2
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| "N/A".to_string())
    };

    DisplayRow {
        name: format!(
            "{} {}",
            capitalize(&employee.surname),
            capitalize(&employee.given_name)
        ),
        phone,
        campus_label: capitalize(employee.campus.as_str()),
        section_label: match employee.assignment.section() {
            Some(section) => capitalize(section.as_str()),
            None => "N/A".to_string(),
        },
        employee_type_label: capitalize(employee.assignment.employee_type().as_str()),
        employee: employee.clone(),
    }
}
