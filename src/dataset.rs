use uuid::Uuid;

use crate::models::{StudentDraft, StudentRecord};

/// The shared in-memory record collection. Its lifetime is the process
/// session; mutation is only reachable through `&mut`, so a reader observes
/// either the pre- or post-mutation collection, never a partial state.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<StudentRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Manual add. The id is assigned here and returned to the caller.
    pub fn add(&mut self, draft: StudentDraft) -> Uuid {
        let record = draft.into_record();
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Bulk append for the import path. No merging or deduplication.
    pub fn append(&mut self, batch: Vec<StudentRecord>) {
        self.records.extend(batch);
    }

    /// In-place edit keyed by id. Returns false when the id is unknown.
    pub fn update(&mut self, updated: StudentRecord) -> bool {
        match self.records.iter_mut().find(|record| record.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Explicit delete. Returns false when the id is unknown.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlacementStatus;

    fn draft(institution: &str) -> StudentDraft {
        StudentDraft {
            institution: institution.to_string(),
            ..StudentDraft::default()
        }
    }

    #[test]
    fn add_assigns_distinct_ids() {
        let mut dataset = Dataset::new();
        let a = dataset.add(draft("IIT Bombay"));
        let b = dataset.add(draft("IIT Bombay"));
        assert_ne!(a, b);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut dataset = Dataset::new();
        dataset.add(draft("IIT Bombay"));
        dataset.add(draft("Anna University"));
        dataset.add(draft("Other"));
        let names: Vec<&str> = dataset
            .records()
            .iter()
            .map(|record| record.institution.as_str())
            .collect();
        assert_eq!(names, vec!["IIT Bombay", "Anna University", "Other"]);
    }

    #[test]
    fn update_replaces_the_matching_record() {
        let mut dataset = Dataset::new();
        let id = dataset.add(draft("IIT Delhi"));
        let mut edited = dataset.get(id).unwrap().clone();
        edited.status = PlacementStatus::Placed;
        edited.accepted_salary = Some(1_500_000);

        assert!(dataset.update(edited));
        let record = dataset.get(id).unwrap();
        assert_eq!(record.status, PlacementStatus::Placed);
        assert_eq!(record.accepted_salary, Some(1_500_000));
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn update_unknown_id_is_a_noop() {
        let mut dataset = Dataset::new();
        dataset.add(draft("IIT Delhi"));
        let stray = draft("Other").into_record();
        assert!(!dataset.update(stray));
        assert_eq!(dataset.records()[0].institution, "IIT Delhi");
    }

    #[test]
    fn remove_deletes_exactly_one_record() {
        let mut dataset = Dataset::new();
        let keep = dataset.add(draft("IIT Bombay"));
        let drop = dataset.add(draft("Other"));
        assert!(dataset.remove(drop));
        assert!(!dataset.remove(drop));
        assert_eq!(dataset.len(), 1);
        assert!(dataset.get(keep).is_some());
    }
}
