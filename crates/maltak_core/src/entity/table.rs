//! Typed in-memory table.

use crate::entity::{EntityId, IdSequence};
use std::collections::BTreeMap;

/// A record that can live in a [`Table`].
///
/// Implementors expose the identity the table keys them by.
pub trait Record: Clone {
    /// Human-readable name of the entity kind, used in logs.
    const KIND: &'static str;

    /// Returns the record's identity.
    fn id(&self) -> EntityId;
}

/// Canonical storage for one entity kind.
///
/// `Table<R>` maps identity to record and owns the kind's identity
/// sequence. It knows nothing about relations or ordering; the query
/// engine sorts, filters and joins on top of [`all`](Self::all).
///
/// # Example
///
/// ```rust,ignore
/// let mut categories: Table<Category> = Table::new();
/// let id = categories.next_id();
/// categories.put(Category { id, ..draft });
/// assert!(categories.get(id).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Table<R: Record> {
    rows: BTreeMap<EntityId, R>,
    sequence: IdSequence,
}

impl<R: Record> Table<R> {
    /// Creates an empty table with a fresh identity sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            sequence: IdSequence::new(),
        }
    }

    /// Gets a record by identity.
    ///
    /// Returns `None` if no record has this identity.
    pub fn get(&self, id: EntityId) -> Option<&R> {
        self.rows.get(&id)
    }

    /// Gets a mutable reference to a record by identity.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut R> {
        self.rows.get_mut(&id)
    }

    /// Inserts or replaces the record stored under its identity.
    pub fn put(&mut self, record: R) {
        self.rows.insert(record.id(), record);
    }

    /// Hands out the next identity for this kind.
    pub fn next_id(&mut self) -> EntityId {
        self.sequence.next_id()
    }

    /// Returns every stored record.
    ///
    /// Callers must not rely on the order of the returned records.
    pub fn all(&self) -> Vec<R> {
        self.rows.values().cloned().collect()
    }

    /// Iterates over stored records without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    /// Returns the first record matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&R>
    where
        P: FnMut(&R) -> bool,
    {
        self.rows.values().find(|r| predicate(r))
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: EntityId,
        label: &'static str,
    }

    impl Record for Row {
        const KIND: &'static str = "row";

        fn id(&self) -> EntityId {
            self.id
        }
    }

    #[test]
    fn get_missing_is_none() {
        let table: Table<Row> = Table::new();
        assert!(table.get(EntityId::new(1)).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn put_then_get() {
        let mut table = Table::new();
        let id = table.next_id();
        table.put(Row { id, label: "a" });
        assert_eq!(table.get(id).map(|r| r.label), Some("a"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn put_is_upsert() {
        let mut table = Table::new();
        let id = table.next_id();
        table.put(Row { id, label: "a" });
        table.put(Row { id, label: "b" });
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(id).map(|r| r.label), Some("b"));
    }

    #[test]
    fn next_id_strictly_increases() {
        let mut table: Table<Row> = Table::new();
        let ids: Vec<_> = (0..50).map(|_| table.next_id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids[0], EntityId::new(1));
    }

    #[test]
    fn next_id_does_not_depend_on_puts() {
        let mut table = Table::new();
        let first = table.next_id();
        let second = table.next_id();
        table.put(Row {
            id: second,
            label: "only second",
        });
        assert_eq!(table.next_id(), EntityId::new(3));
        assert!(table.get(first).is_none());
    }

    #[test]
    fn find_and_all() {
        let mut table = Table::new();
        for label in ["x", "y", "z"] {
            let id = table.next_id();
            table.put(Row { id, label });
        }
        assert_eq!(table.find(|r| r.label == "y").map(|r| r.id), Some(EntityId::new(2)));
        assert_eq!(table.all().len(), 3);
    }
}
