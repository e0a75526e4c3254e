//! Derived person and session counters.
//!
//! The counter is always consistent with the store's person sequence:
//! updated incrementally on add/remove, rebuilt wholesale on bulk replace.
//! Capacity checks use the `*_if_added` queries so limits are enforced
//! before mutation, never by rolling back.

use std::collections::HashMap;

use super::person::Person;
use super::session::Session;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    person_count: usize,
    session_counts: HashMap<Session, usize>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one added person.
    pub fn add(&mut self, person: &Person) {
        self.person_count += 1;
        if let Some(session) = &person.session {
            *self.session_counts.entry(session.clone()).or_insert(0) += 1;
        }
    }

    /// Account for one removed person.
    pub fn remove(&mut self, person: &Person) {
        debug_assert!(self.person_count > 0);
        self.person_count -= 1;
        let Some(session) = &person.session else {
            return;
        };
        let count = self
            .session_counts
            .get_mut(session)
            .expect("removed person's session was counted");
        *count -= 1;
        if *count == 0 {
            self.session_counts.remove(session);
        }
    }

    /// Rebuild from scratch for a wholesale person-list replacement.
    pub fn rebuild<'a>(&mut self, persons: impl IntoIterator<Item = &'a Person>) {
        self.person_count = 0;
        self.session_counts.clear();
        for person in persons {
            self.add(person);
        }
    }

    pub fn person_count(&self) -> usize {
        self.person_count
    }

    pub fn unique_session_count(&self) -> usize {
        self.session_counts.len()
    }

    pub fn session_count(&self, session: &Session) -> usize {
        self.session_counts.get(session).copied().unwrap_or(0)
    }

    /// Person count if one more person were added.
    pub fn person_count_if_added(&self) -> usize {
        self.person_count + 1
    }

    /// Unique session count if a person with `session` were added.
    pub fn unique_session_count_if_added(&self, session: &Session) -> usize {
        if self.session_counts.contains_key(session) {
            self.unique_session_count()
        } else {
            self.unique_session_count() + 1
        }
    }

    /// Distinct sessions currently present.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.session_counts.keys()
    }
}
