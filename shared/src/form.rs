//! Employee registration/edit form validation
//!
//! Turns raw form values into a normalized submission payload or a complete
//! field-level error map. Validation is exhaustive: every field is checked
//! and every failure is reported together, so the form can render all
//! problems at once. Normalization is all-or-nothing.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::models::{
    Assignment, Campus, Employee, EmployeeType, EmploymentStatus, Gender, MaritalStatus, Section,
};

// ── Text length limits ──────────────────────────────────────────────

/// Names, nationality, job titles
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: NIN, TIN, NSSF number
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Places of residence
pub const MAX_ADDRESS_LEN: usize = 500;

/// Field-level validation errors, keyed by form field name
///
/// Ordered so error listings are stable; the first failure per field wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Names of the failed fields, in order
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Detail map for the API error envelope
    pub fn into_details(self) -> HashMap<String, serde_json::Value> {
        self.0
            .into_iter()
            .map(|(field, message)| (field.to_string(), message.into()))
            .collect()
    }
}

/// Raw values from the registration/edit form
///
/// Text inputs arrive as strings (empty means "not provided"); select
/// inputs arrive already typed, so out-of-set values are rejected at the
/// JSON boundary before validation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub surname: String,
    pub given_name: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub gender: Gender,
    pub nationality: String,
    #[serde(default)]
    pub nin: String,
    pub telephone_number1: String,
    #[serde(default)]
    pub telephone_number2: String,
    #[serde(default)]
    pub email_address: String,
    pub place_of_residence: String,
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub tin: String,
    #[serde(default)]
    pub nssf_number: String,
    pub campus: Campus,
    pub employee_type: EmployeeType,
    #[serde(default)]
    pub section: Option<Section>,
    pub job_title: String,
    pub employment_status: EmploymentStatus,
}

/// Normalized output of a successful validation, ready for submission
///
/// Same shape as [`Employee`] minus the id: trimmed text, absent optionals
/// instead of empty strings, canonical date, section resolved into the
/// assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub surname: String,
    pub given_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub nationality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nin: Option<String>,
    pub telephone_number1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone_number2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    pub place_of_residence: String,
    pub marital_status: MaritalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nssf_number: Option<String>,
    pub campus: Campus,
    #[serde(flatten)]
    pub assignment: Assignment,
    pub job_title: String,
    pub employment_status: EmploymentStatus,
}

impl EmployeeForm {
    /// Validate every field and produce the normalized payload.
    ///
    /// Never panics on bad input: invalid values come back as the complete
    /// field-error map.
    pub fn validate(&self) -> Result<EmployeePayload, FieldErrors> {
        let mut errors = FieldErrors::default();

        let surname = required_text(
            &self.surname,
            "surname",
            "Surname is required",
            MAX_NAME_LEN,
            &mut errors,
        );
        let given_name = required_text(
            &self.given_name,
            "given_name",
            "Given name is required",
            MAX_NAME_LEN,
            &mut errors,
        );

        let date_of_birth =
            match NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("date_of_birth", "Enter a valid date");
                    None
                }
            };

        let nationality = required_text(
            &self.nationality,
            "nationality",
            "Nationality is required",
            MAX_NAME_LEN,
            &mut errors,
        );
        let nin = optional_text(&self.nin, "nin", MAX_SHORT_TEXT_LEN, &mut errors);

        let telephone_number1 = {
            let trimmed = self.telephone_number1.trim();
            if ten_digits(trimmed) {
                Some(trimmed.to_string())
            } else {
                errors.push(
                    "telephone_number1",
                    "Telephone number must be exactly 10 digits",
                );
                None
            }
        };
        let telephone_number2 = {
            let trimmed = self.telephone_number2.trim();
            if trimmed.is_empty() {
                Some(None)
            } else if ten_digits(trimmed) {
                Some(Some(trimmed.to_string()))
            } else {
                errors.push(
                    "telephone_number2",
                    "Telephone number must be exactly 10 digits",
                );
                None
            }
        };

        let email_address = {
            let trimmed = self.email_address.trim();
            if trimmed.is_empty() {
                Some(None)
            } else if trimmed.len() <= MAX_EMAIL_LEN && trimmed.validate_email() {
                Some(Some(trimmed.to_string()))
            } else {
                errors.push("email_address", "Invalid email address");
                None
            }
        };

        let place_of_residence = required_text(
            &self.place_of_residence,
            "place_of_residence",
            "Place of residence is required",
            MAX_ADDRESS_LEN,
            &mut errors,
        );
        let tin = optional_text(&self.tin, "tin", MAX_SHORT_TEXT_LEN, &mut errors);
        let nssf_number = optional_text(
            &self.nssf_number,
            "nssf_number",
            MAX_SHORT_TEXT_LEN,
            &mut errors,
        );
        let job_title = required_text(
            &self.job_title,
            "job_title",
            "Job title is required",
            MAX_NAME_LEN,
            &mut errors,
        );

        // Cross-field rule: section is mandatory for teaching staff and
        // silently dropped for non-teaching staff. The error always lands
        // on the section field, never on employee_type.
        let assignment = match self.employee_type {
            EmployeeType::Teaching => match self.section {
                Some(section) => Some(Assignment::Teaching { section }),
                None => {
                    errors.push("section", "Section is required for teaching employees");
                    None
                }
            },
            EmployeeType::NonTeaching => Some(Assignment::NonTeaching),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // Every Option above is Some once the error map is empty
        match (
            surname,
            given_name,
            date_of_birth,
            nationality,
            telephone_number1,
            telephone_number2,
            email_address,
            place_of_residence,
            job_title,
            assignment,
        ) {
            (
                Some(surname),
                Some(given_name),
                Some(date_of_birth),
                Some(nationality),
                Some(telephone_number1),
                Some(telephone_number2),
                Some(email_address),
                Some(place_of_residence),
                Some(job_title),
                Some(assignment),
            ) => Ok(EmployeePayload {
                surname,
                given_name,
                date_of_birth,
                gender: self.gender,
                nationality,
                nin,
                telephone_number1,
                telephone_number2,
                email_address,
                place_of_residence,
                marital_status: self.marital_status,
                tin,
                nssf_number,
                campus: self.campus,
                assignment,
                job_title,
                employment_status: self.employment_status,
            }),
            _ => unreachable!("all fields validated"),
        }
    }
}

impl EmployeePayload {
    /// Reconstruct form values from a normalized payload.
    ///
    /// Used to prefill the edit form and to re-submit normalized values;
    /// validating the result yields a payload identical to this one.
    pub fn to_form(&self) -> EmployeeForm {
        EmployeeForm {
            surname: self.surname.clone(),
            given_name: self.given_name.clone(),
            date_of_birth: self.date_of_birth.format("%Y-%m-%d").to_string(),
            gender: self.gender,
            nationality: self.nationality.clone(),
            nin: self.nin.clone().unwrap_or_default(),
            telephone_number1: self.telephone_number1.clone(),
            telephone_number2: self.telephone_number2.clone().unwrap_or_default(),
            email_address: self.email_address.clone().unwrap_or_default(),
            place_of_residence: self.place_of_residence.clone(),
            marital_status: self.marital_status,
            tin: self.tin.clone().unwrap_or_default(),
            nssf_number: self.nssf_number.clone().unwrap_or_default(),
            campus: self.campus,
            employee_type: self.assignment.employee_type(),
            section: self.assignment.section(),
            job_title: self.job_title.clone(),
            employment_status: self.employment_status,
        }
    }

    /// Attach an identifier, producing a full record
    pub fn into_employee(self, id: impl Into<String>) -> Employee {
        Employee {
            id: id.into(),
            surname: self.surname,
            given_name: self.given_name,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            nationality: self.nationality,
            nin: self.nin,
            telephone_number1: self.telephone_number1,
            telephone_number2: self.telephone_number2,
            email_address: self.email_address,
            place_of_residence: self.place_of_residence,
            marital_status: self.marital_status,
            tin: self.tin,
            nssf_number: self.nssf_number,
            campus: self.campus,
            assignment: self.assignment,
            job_title: self.job_title,
            employment_status: self.employment_status,
        }
    }
}

fn ten_digits(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

fn required_text(
    value: &str,
    field: &'static str,
    message: &'static str,
    max_len: usize,
    errors: &mut FieldErrors,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
        return None;
    }
    if trimmed.len() > max_len {
        errors.push(
            field,
            format!("{field} is too long ({} chars, max {max_len})", trimmed.len()),
        );
        return None;
    }
    Some(trimmed.to_string())
}

/// Empty (after trimming) normalizes to absent
fn optional_text(
    value: &str,
    field: &'static str,
    max_len: usize,
    errors: &mut FieldErrors,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.len() > max_len {
        errors.push(
            field,
            format!("{field} is too long ({} chars, max {max_len})", trimmed.len()),
        );
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> EmployeeForm {
        EmployeeForm {
            surname: "  okello ".into(),
            given_name: "grace".into(),
            date_of_birth: "1990-04-12".into(),
            gender: Gender::Female,
            nationality: "Uganda".into(),
            nin: "".into(),
            telephone_number1: "0700123456".into(),
            telephone_number2: "".into(),
            email_address: "".into(),
            place_of_residence: "Kampala".into(),
            marital_status: MaritalStatus::Single,
            tin: "".into(),
            nssf_number: "".into(),
            campus: Campus::Platinum,
            employee_type: EmployeeType::Teaching,
            section: Some(Section::Nursery),
            job_title: "Class Teacher".into(),
            employment_status: EmploymentStatus::Active,
        }
    }

    #[test]
    fn test_valid_form_normalizes() {
        let payload = valid_form().validate().unwrap();
        assert_eq!(payload.surname, "okello");
        assert_eq!(payload.date_of_birth.to_string(), "1990-04-12");
        assert_eq!(payload.nin, None);
        assert_eq!(payload.telephone_number2, None);
        assert_eq!(payload.email_address, None);
        assert_eq!(
            payload.assignment,
            Assignment::Teaching {
                section: Section::Nursery
            }
        );
    }

    #[test]
    fn test_teaching_without_section_fails_on_section_only() {
        let form = EmployeeForm {
            section: None,
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["section"]);
        assert_eq!(
            errors.get("section"),
            Some("Section is required for teaching employees")
        );
    }

    #[test]
    fn test_non_teaching_drops_stale_section() {
        let form = EmployeeForm {
            employee_type: EmployeeType::NonTeaching,
            section: Some(Section::Nursery),
            ..valid_form()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.assignment, Assignment::NonTeaching);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["employee_type"], "non-teaching");
        assert!(json.get("section").is_none());
    }

    #[test]
    fn test_short_phone_fails_on_that_field_only() {
        let form = EmployeeForm {
            telephone_number1: "12345".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["telephone_number1"]);
        assert!(
            errors
                .get("telephone_number1")
                .unwrap()
                .contains("must be exactly 10 digits")
        );
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        let form = EmployeeForm {
            telephone_number1: "07001234ab".into(),
            ..valid_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_secondary_phone_optional_but_checked_when_present() {
        let ok = EmployeeForm {
            telephone_number2: " 0788999000 ".into(),
            ..valid_form()
        };
        assert_eq!(
            ok.validate().unwrap().telephone_number2,
            Some("0788999000".into())
        );

        let bad = EmployeeForm {
            telephone_number2: "123".into(),
            ..valid_form()
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["telephone_number2"]);
    }

    #[test]
    fn test_email_optional_but_checked_when_present() {
        let ok = EmployeeForm {
            email_address: "grace@school.ac.ug".into(),
            ..valid_form()
        };
        assert_eq!(
            ok.validate().unwrap().email_address,
            Some("grace@school.ac.ug".into())
        );

        let bad = EmployeeForm {
            email_address: "not-an-email".into(),
            ..valid_form()
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.get("email_address"), Some("Invalid email address"));
    }

    #[test]
    fn test_invalid_date() {
        for bad in ["", "12/04/1990", "1990-13-40", "yesterday"] {
            let form = EmployeeForm {
                date_of_birth: bad.into(),
                ..valid_form()
            };
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get("date_of_birth"), Some("Enter a valid date"));
        }
    }

    #[test]
    fn test_all_errors_reported_together() {
        let form = EmployeeForm {
            surname: "   ".into(),
            given_name: "".into(),
            date_of_birth: "bad".into(),
            nationality: "".into(),
            telephone_number1: "123".into(),
            place_of_residence: "".into(),
            job_title: "".into(),
            section: None,
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            [
                "date_of_birth",
                "given_name",
                "job_title",
                "nationality",
                "place_of_residence",
                "section",
                "surname",
                "telephone_number1",
            ]
        );
        assert_eq!(errors.get("surname"), Some("Surname is required"));
        assert_eq!(errors.get("given_name"), Some("Given name is required"));
    }

    #[test]
    fn test_overlong_text_rejected() {
        let form = EmployeeForm {
            nin: "x".repeat(MAX_SHORT_TEXT_LEN + 1),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("nin").unwrap().contains("too long"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let payload = valid_form().validate().unwrap();
        let again = payload.to_form().validate().unwrap();
        assert_eq!(again, payload);
    }

    #[test]
    fn test_into_employee_carries_everything() {
        let payload = valid_form().validate().unwrap();
        let employee = payload.clone().into_employee("emp-42");
        assert_eq!(employee.id, "emp-42");
        assert_eq!(employee.surname, payload.surname);
        assert_eq!(employee.assignment, payload.assignment);
    }

    #[test]
    fn test_field_errors_details_shape() {
        let form = EmployeeForm {
            telephone_number1: "123".into(),
            ..valid_form()
        };
        let details = form.validate().unwrap_err().into_details();
        assert_eq!(details.len(), 1);
        assert!(details["telephone_number1"].is_string());
    }

    #[test]
    fn test_form_deserializes_with_optional_text_defaults() {
        let json = serde_json::json!({
            "surname": "okello",
            "given_name": "grace",
            "date_of_birth": "1990-04-12",
            "gender": "female",
            "nationality": "Uganda",
            "telephone_number1": "0700123456",
            "place_of_residence": "Kampala",
            "marital_status": "single",
            "campus": "platinum",
            "employee_type": "non-teaching",
            "job_title": "Bursar",
            "employment_status": "active"
        });
        let form: EmployeeForm = serde_json::from_value(json).unwrap();
        assert_eq!(form.nin, "");
        assert_eq!(form.section, None);
        assert!(form.validate().is_ok());
    }
}
