//! The in-memory contact store.

use std::sync::Arc;

use super::counter::Counter;
use super::person::Person;

/// Insertion-ordered collection of unique persons plus derived counters.
///
/// Entries are `Arc<Person>` so cloning the store for an undo snapshot is a
/// structural copy (one pointer per person, one counter clone), not a
/// per-person string copy. An `Arc` also serves as the resolved identity of
/// a person within one store generation; batch delete dedups on it.
#[derive(Clone, Debug, Default)]
pub struct ContactStore {
    persons: Vec<Arc<Person>>,
    counter: Counter,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Persons in insertion (display) order.
    pub fn persons(&self) -> &[Arc<Person>] {
        &self.persons
    }

    /// Whether `person` duplicates an existing record (same fields or email).
    pub fn contains_duplicate(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_duplicate_of(person))
    }

    /// Append a person, preserving insertion order.
    ///
    /// Capacity and duplicate checks are the caller's responsibility; the
    /// store itself only keeps the counter consistent.
    pub fn add(&mut self, person: Person) -> Arc<Person> {
        let person = Arc::new(person);
        self.counter.add(&person);
        self.persons.push(Arc::clone(&person));
        person
    }

    /// Remove the entry identified by `target` (pointer identity).
    ///
    /// Returns false if the entry is not present (already removed).
    pub fn remove(&mut self, target: &Arc<Person>) -> bool {
        let Some(pos) = self.persons.iter().position(|p| Arc::ptr_eq(p, target)) else {
            return false;
        };
        let removed = self.persons.remove(pos);
        self.counter.remove(&removed);
        true
    }

    /// Replace the whole person sequence, rebuilding the counter.
    pub fn replace_all(&mut self, persons: Vec<Arc<Person>>) {
        self.counter.rebuild(persons.iter().map(|p| p.as_ref()));
        self.persons = persons;
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }
}

impl PartialEq for ContactStore {
    /// Content equality: same persons in the same order. The counter is
    /// derived, and pointer identity is deliberately ignored so a restored
    /// snapshot compares equal to the store it was taken from.
    fn eq(&self, other: &Self) -> bool {
        self.persons.len() == other.persons.len()
            && self
                .persons
                .iter()
                .zip(&other.persons)
                .all(|(a, b)| a.as_ref() == b.as_ref())
    }
}

impl Eq for ContactStore {}
