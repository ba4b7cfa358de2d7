//! Collection — the ordered sequence of all stored records.
//!
//! There is no index: every lookup is a linear scan by id, and the first
//! match wins if a hand-edited file ever contains duplicates.

use serde::{Deserialize, Serialize};

use crate::error::ObjectStoreError;
use crate::id::ObjectId;
use crate::record::{ObjectDraft, Record};

/// All records, in insertion order. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Find a record by id.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    fn position(&self, id: ObjectId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// One greater than the largest id present, or `1` when empty.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::IdSpaceExhausted`] if the largest id is
    /// `u64::MAX`.
    pub fn next_id(&self) -> Result<ObjectId, ObjectStoreError> {
        match self.records.iter().map(|record| record.id).max() {
            None => Ok(ObjectId::FIRST),
            Some(max) => max.next().ok_or(ObjectStoreError::IdSpaceExhausted),
        }
    }

    /// Append a new record built from `draft` with the next free id.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::IdSpaceExhausted`] if no id is left.
    pub fn insert(&mut self, draft: ObjectDraft) -> Result<&Record, ObjectStoreError> {
        let record = Record::from_draft(self.next_id()?, draft);
        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }

    /// Merge `draft` into the record with `id`, returning it, or `None` when
    /// no record matches.
    pub fn update(&mut self, id: ObjectId, draft: ObjectDraft) -> Option<&Record> {
        let index = self.position(id)?;
        let record = &mut self.records[index];
        record.merge(draft);
        Some(&*record)
    }

    /// Remove the record with `id`, returning it, or `None` when no record
    /// matches.
    pub fn remove(&mut self, id: ObjectId) -> Option<Record> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}
