// store.rs — process-lifetime in-memory tables with monotonic integer ids.

use std::collections::BTreeMap;

use crate::model::{Task, User};

/// A single in-memory collection keyed by auto-incrementing identifier.
///
/// Identifiers start at 1 and are never reused within the process lifetime,
/// even after deletion. Absence is reported as `None`, never as an error —
/// the service layer decides how to surface it.
#[derive(Debug)]
pub struct Table<T> {
    records: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assign the next identifier and store the record built from it.
    /// Returns a reference to the stored record.
    pub fn insert_with(&mut self, make: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.records.entry(id).or_insert_with(|| make(id))
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.records.get_mut(&id)
    }

    pub fn remove(&mut self, id: u64) -> Option<T> {
        self.records.remove(&id)
    }

    /// Records in insertion order. Ascending id order is identical because
    /// ids are assigned monotonically.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    /// Remove every record matching `pred`; returns how many were removed.
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| !pred(record));
        before - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Single source of truth for all resources. One instance per server,
/// injected into the service — never global state.
#[derive(Debug, Default)]
pub struct Store {
    pub users: Table<User>,
    pub tasks: Table<Task>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
