//! Generic keyed record table.
//!
//! # Responsibility
//! - Own the records of one entity kind behind a single lock.
//! - Allocate identifiers and provide keyed, scan and merge operations.
//!
//! # Invariants
//! - Records are enumerated in insertion order; nothing is ever removed.
//! - `index` maps every stored id to its slot in `records`.
//! - Read-merge-write in `update_with` happens under one write lock.
//! - A poisoned lock is recovered instead of propagating the panic.

use crate::model::{new_record_id, Record, RecordId};
use log::debug;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Slots<T> {
    records: Vec<T>,
    index: HashMap<RecordId, usize>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

/// In-memory table holding every record of kind `T`.
pub struct RecordTable<T: Record> {
    slots: RwLock<Slots<T>>,
}

impl<T: Record> Default for RecordTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordTable<T> {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(Slots::default()),
        }
    }

    /// Allocates a fresh id, builds the record with it and stores it.
    ///
    /// Returns a copy of the stored record.
    pub fn insert_with(&self, build: impl FnOnce(RecordId) -> T) -> T {
        let mut slots = self.write();
        let mut id = new_record_id();
        while slots.index.contains_key(&id) {
            id = new_record_id();
        }

        let record = build(id.clone());
        let slot = slots.records.len();
        slots.records.push(record.clone());
        slots.index.insert(id, slot);
        debug!(
            "event=record_create module=store status=ok kind={} id={}",
            T::KIND,
            record.id()
        );
        record
    }

    /// Exact-key lookup.
    pub fn get(&self, id: &str) -> Option<T> {
        let slots = self.read();
        slots
            .index
            .get(id)
            .map(|&slot| slots.records[slot].clone())
    }

    /// Snapshot of all records in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.read().records.clone()
    }

    /// First record matching `predicate`, in insertion order.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.read()
            .records
            .iter()
            .find(|record| predicate(record))
            .cloned()
    }

    /// All records matching `predicate`, in insertion order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.read()
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Mutates the record stored under `id` in place.
    ///
    /// Returns the updated record, or `None` when `id` is unknown.
    pub fn update_with(&self, id: &str, mutate: impl FnOnce(&mut T)) -> Option<T> {
        let mut slots = self.write();
        let slot = *slots.index.get(id)?;
        let record = &mut slots.records[slot];
        mutate(record);
        Some(record.clone())
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Slots<T>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slots<T>> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::RecordTable;
    use crate::model::{Record, RecordId};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tag {
        id: RecordId,
        name: String,
    }

    impl Record for Tag {
        const KIND: &'static str = "tag";

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn insert(table: &RecordTable<Tag>, name: &str) -> Tag {
        table.insert_with(|id| Tag {
            id,
            name: name.to_string(),
        })
    }

    #[test]
    fn list_preserves_insertion_order() {
        let table = RecordTable::new();
        let names = ["civic", "budget", "transit", "parks"];
        for name in names {
            insert(&table, name);
        }

        let listed = table
            .list()
            .into_iter()
            .map(|tag| tag.name)
            .collect::<Vec<_>>();
        assert_eq!(listed, names);
    }

    #[test]
    fn get_returns_inserted_record_and_none_for_unknown_id() {
        let table = RecordTable::new();
        let tag = insert(&table, "civic");

        assert_eq!(table.get(&tag.id), Some(tag));
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn list_is_a_snapshot() {
        let table = RecordTable::new();
        insert(&table, "civic");
        let snapshot = table.list();

        insert(&table, "budget");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn update_with_mutates_in_place_and_keeps_key() {
        let table = RecordTable::new();
        let tag = insert(&table, "civic");

        let updated = table
            .update_with(&tag.id, |record| record.name = "civics".to_string())
            .expect("known id should update");
        assert_eq!(updated.id, tag.id);
        assert_eq!(updated.name, "civics");
        assert_eq!(table.get(&tag.id), Some(updated));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn update_with_unknown_id_leaves_table_unchanged() {
        let table = RecordTable::new();
        insert(&table, "civic");

        let mut called = false;
        assert!(table.update_with("missing", |_| called = true).is_none());
        assert!(!called);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn find_and_filter_scan_in_order() {
        let table = RecordTable::new();
        let first = insert(&table, "dup");
        insert(&table, "other");
        insert(&table, "dup");

        assert_eq!(table.find(|tag| tag.name == "dup"), Some(first));
        assert_eq!(table.filter(|tag| tag.name == "dup").len(), 2);
        assert!(table.filter(|tag| tag.name == "none").is_empty());
    }
}
