//! Employee record store
//!
//! In-memory, concurrency-safe storage. Records carry an insertion sequence
//! number so listings come back in the order employees were registered.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use uuid::Uuid;

use shared::form::EmployeePayload;
use shared::models::{Employee, EmploymentStatus};

#[derive(Debug, Default)]
pub struct EmployeeStore {
    records: DashMap<String, (u64, Employee)>,
    seq: AtomicU64,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a validated payload as a new record with a fresh id
    pub fn insert(&self, payload: EmployeePayload) -> Employee {
        let id = Uuid::new_v4().to_string();
        let employee = payload.into_employee(&id);
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.records.insert(id, (seq, employee.clone()));
        employee
    }

    /// Fetch a record by id
    pub fn get(&self, id: &str) -> Option<Employee> {
        self.records.get(id).map(|entry| entry.1.clone())
    }

    /// Replace an existing record, keeping its id and insertion position
    ///
    /// Returns `None` when no record with this id exists.
    pub fn update(&self, id: &str, payload: EmployeePayload) -> Option<Employee> {
        let mut entry = self.records.get_mut(id)?;
        let employee = payload.into_employee(id);
        entry.1 = employee.clone();
        Some(employee)
    }

    /// List records in insertion order, optionally narrowed to one status
    pub fn list(&self, status: Option<EmploymentStatus>) -> Vec<Employee> {
        let mut entries: Vec<(u64, Employee)> = self
            .records
            .iter()
            .filter(|entry| match status {
                Some(wanted) => entry.1.employment_status == wanted,
                None => true,
            })
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, employee)| employee).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::{Assignment, Campus, Gender, MaritalStatus, Section};

    fn payload(surname: &str, status: EmploymentStatus) -> EmployeePayload {
        EmployeePayload {
            surname: surname.into(),
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
            employment_status: status,
        }
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let store = EmployeeStore::new();
        let a = store.insert(payload("okello", EmploymentStatus::Active));
        let b = store.insert(payload("nambi", EmploymentStatus::Active));
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_round_trips() {
        let store = EmployeeStore::new();
        let created = store.insert(payload("okello", EmploymentStatus::Active));
        assert_eq!(store.get(&created.id), Some(created));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = EmployeeStore::new();
        let a = store.insert(payload("okello", EmploymentStatus::Active));
        let b = store.insert(payload("nambi", EmploymentStatus::Active));
        let c = store.insert(payload("adong", EmploymentStatus::Left));

        let ids: Vec<String> = store.list(None).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, [a.id.clone(), b.id, c.id]);

        let active: Vec<String> = store
            .list(Some(EmploymentStatus::Active))
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0], a.id);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let store = EmployeeStore::new();
        let first = store.insert(payload("okello", EmploymentStatus::Active));
        let second = store.insert(payload("nambi", EmploymentStatus::Active));

        let updated = store
            .update(&first.id, payload("okello", EmploymentStatus::Left))
            .unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.employment_status, EmploymentStatus::Left);

        // Still listed before the later insert
        let ids: Vec<String> = store.list(None).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, [first.id, second.id]);
    }

    #[test]
    fn test_update_missing_returns_none() {
        let store = EmployeeStore::new();
        assert!(
            store
                .update("missing", payload("okello", EmploymentStatus::Active))
                .is_none()
        );
    }
}
