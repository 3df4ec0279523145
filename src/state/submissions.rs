//! Local log of successful submissions

use super::forms::FormKind;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// One accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub form: FormKind,
    pub submitted_at: DateTime<Utc>,
    pub values: BTreeMap<String, String>,
}

impl SubmissionRecord {
    pub fn new(form: FormKind, values: BTreeMap<String, String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            form,
            submitted_at: Utc::now(),
            values,
        }
    }

    /// Short line for list views: the first non-empty name-ish value
    pub fn summary(&self) -> String {
        ["full_name", "name", "first_name", "email"]
            .iter()
            .filter_map(|key| self.values.get(*key))
            .find(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| "(no name)".to_string())
    }
}

/// Storage seam for submission records
pub trait SubmissionRepository: Send {
    fn insert(&mut self, record: SubmissionRecord) -> Uuid;
    fn get(&self, id: Uuid) -> Option<&SubmissionRecord>;
    fn remove(&mut self, id: Uuid) -> Option<SubmissionRecord>;
    /// All records, newest first
    fn list(&self) -> Vec<&SubmissionRecord>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Arena of records plus an id index
#[derive(Debug, Default)]
pub struct InMemorySubmissions {
    records: Vec<SubmissionRecord>,
    index: HashMap<Uuid, usize>,
}

impl InMemorySubmissions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionRepository for InMemorySubmissions {
    fn insert(&mut self, record: SubmissionRecord) -> Uuid {
        let id = record.id;
        if let Some(&slot) = self.index.get(&id) {
            self.records[slot] = record;
        } else {
            self.index.insert(id, self.records.len());
            self.records.push(record);
        }
        id
    }

    fn get(&self, id: Uuid) -> Option<&SubmissionRecord> {
        self.index.get(&id).map(|&slot| &self.records[slot])
    }

    fn remove(&mut self, id: Uuid) -> Option<SubmissionRecord> {
        let slot = self.index.remove(&id)?;
        let record = self.records.swap_remove(slot);
        if let Some(moved) = self.records.get(slot) {
            self.index.insert(moved.id, slot);
        }
        Some(record)
    }

    fn list(&self) -> Vec<&SubmissionRecord> {
        let mut records: Vec<_> = self.records.iter().collect();
        records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        records
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
