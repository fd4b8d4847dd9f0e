//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Wire value ("male", "female")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Cohabiting,
    Widowed,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::Cohabiting => "cohabiting",
            Self::Widowed => "widowed",
        }
    }
}

/// School campus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Campus {
    Platinum,
    Horizon,
    Daisy,
}

impl Campus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Platinum => "platinum",
            Self::Horizon => "horizon",
            Self::Daisy => "daisy",
        }
    }
}

/// Employee category ("teaching" / "non-teaching")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeType {
    Teaching,
    NonTeaching,
}

impl EmployeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teaching => "teaching",
            Self::NonTeaching => "non-teaching",
        }
    }
}

/// Teaching section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Nursery,
    Primary,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nursery => "nursery",
            Self::Primary => "primary",
        }
    }
}

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentStatus {
    Active,
    Left,
    Other,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Left => "left",
            Self::Other => "other",
        }
    }
}

impl Default for EmploymentStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Teaching assignment
///
/// Section exists only on the teaching variant, so "section is present iff
/// the employee is teaching staff" holds by construction in every record.
/// On the wire this flattens back to the flat `employee_type` + `section`
/// fields the API exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "employee_type", rename_all = "kebab-case")]
pub enum Assignment {
    Teaching { section: Section },
    NonTeaching,
}

impl Assignment {
    /// The flat employee category this assignment corresponds to
    pub fn employee_type(&self) -> EmployeeType {
        match self {
            Self::Teaching { .. } => EmployeeType::Teaching,
            Self::NonTeaching => EmployeeType::NonTeaching,
        }
    }

    /// Section, if any (always `Some` for teaching staff)
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::Teaching { section } => Some(*section),
            Self::NonTeaching => None,
        }
    }
}

/// Employee record - the canonical staff entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub surname: String,
    pub given_name: String,
    /// Serializes as `YYYY-MM-DD`
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub nationality: String,
    /// National ID number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nin: Option<String>,
    /// Exactly 10 digits
    pub telephone_number1: String,
    /// Absent or exactly 10 digits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone_number2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    pub place_of_residence: String,
    pub marital_status: MaritalStatus,
    /// Tax identification number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nssf_number: Option<String>,
    pub campus: Campus,
    /// Flattens to `employee_type` (+ `section` for teaching staff)
    #[serde(flatten)]
    pub assignment: Assignment,
    pub job_title: String,
    pub employment_status: EmploymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher() -> Employee {
        Employee {
            id: "emp-1".into(),
            surname: "okello".into(),
            given_name: "grace".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            gender: Gender::Female,
            nationality: "Uganda".into(),
            nin: None,
            telephone_number1: "0700123456".into(),
            telephone_number2: None,
            email_address: None,
            place_of_residence: "Kampala".into(),
            marital_status: MaritalStatus::Single,
            tin: None,
            nssf_number: None,
            campus: Campus::Platinum,
            assignment: Assignment::Teaching {
                section: Section::Nursery,
            },
            job_title: "Class Teacher".into(),
            employment_status: EmploymentStatus::Active,
        }
    }

    #[test]
    fn test_teaching_employee_wire_format() {
        let json = serde_json::to_value(teacher()).unwrap();
        assert_eq!(json["employee_type"], "teaching");
        assert_eq!(json["section"], "nursery");
        assert_eq!(json["date_of_birth"], "1990-04-12");
        assert_eq!(json["campus"], "platinum");
        // Absent optionals are omitted entirely, never empty strings
        assert!(json.get("nin").is_none());
        assert!(json.get("telephone_number2").is_none());
    }

    #[test]
    fn test_non_teaching_employee_has_no_section() {
        let mut employee = teacher();
        employee.assignment = Assignment::NonTeaching;
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["employee_type"], "non-teaching");
        assert!(json.get("section").is_none());
    }

    #[test]
    fn test_employee_round_trip() {
        let employee = teacher();
        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn test_teaching_without_section_is_rejected() {
        let mut json = serde_json::to_value(teacher()).unwrap();
        json.as_object_mut().unwrap().remove("section");
        let result: Result<Employee, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let mut json = serde_json::to_value(teacher()).unwrap();
        json["campus"] = "downtown".into();
        let result: Result<Employee, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_assignment_accessors() {
        let teaching = Assignment::Teaching {
            section: Section::Primary,
        };
        assert_eq!(teaching.employee_type(), EmployeeType::Teaching);
        assert_eq!(teaching.section(), Some(Section::Primary));

        assert_eq!(
            Assignment::NonTeaching.employee_type(),
            EmployeeType::NonTeaching
        );
        assert_eq!(Assignment::NonTeaching.section(), None);
    }
}
