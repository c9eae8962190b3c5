//! Fixed-capacity, append-only record storage
//!
//! Storage for exactly `capacity` records is reserved up front and never
//! grows, so references handed out by `find_by_id` stay valid for as long as
//! the store is borrowed. Lookups are a linear scan in insertion order.

use log::{debug, warn};

use crate::error::{Result, StoreError};
use crate::record::Record;

/// Ordered, bounded collection of student records
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    capacity: usize,
}

impl RecordStore {
    /// Create an empty store able to hold `capacity` records
    ///
    /// Fails with `AllocationFailure` if the backing storage cannot be
    /// reserved. Nothing is kept on the failure path.
    pub fn create(capacity: usize) -> Result<Self> {
        let mut records = Vec::new();
        records
            .try_reserve_exact(capacity)
            .map_err(|_| StoreError::AllocationFailure { capacity })?;

        debug!("created record store with capacity {}", capacity);
        Ok(Self { records, capacity })
    }

    /// Append a record, truncating `name` to the name bound
    ///
    /// A full store rejects the insert with `CapacityExceeded` and is left
    /// unchanged. Identifiers are not checked for uniqueness.
    pub fn insert(&mut self, id: i32, name: &str, gpa: f32) -> Result<()> {
        if self.is_full() {
            warn!(
                "rejected record {}: store is full ({} of {})",
                id,
                self.records.len(),
                self.capacity
            );
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let record = Record::new(id, name, gpa);
        if record.name.len() < name.len() {
            debug!(
                "name for record {} cut from {} to {} bytes",
                id,
                name.len(),
                record.name.len()
            );
        }

        // Reserved up front, so this never reallocates
        self.records.push(record);
        debug!("inserted record {} at slot {}", id, self.records.len() - 1);
        Ok(())
    }

    /// First record with a matching identifier, scanning in insertion order
    pub fn find_by_id(&self, id: i32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records in insertion order
    ///
    /// Each call starts a fresh traversal; the store is not modified.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records, fixed at creation
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Consume the store and free its storage
    ///
    /// Dropping the store does the same; this exists to make the end of the
    /// store's life explicit at call sites. A released store cannot be used
    /// again:
    ///
    /// ```compile_fail
    /// use studentdb::RecordStore;
    ///
    /// let store = RecordStore::create(1).unwrap();
    /// store.release();
    /// store.len();
    /// ```
    ///
    /// Nor released twice:
    ///
    /// ```compile_fail
    /// use studentdb::RecordStore;
    ///
    /// let store = RecordStore::create(1).unwrap();
    /// store.release();
    /// store.release();
    /// ```
    pub fn release(self) {
        debug!(
            "releasing record store ({} of {} slots used)",
            self.records.len(),
            self.capacity
        );
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
