//! Command processing: parse, execute, snapshot, persist.
//!
//! [`Logic`] is the executor facade. It owns the contact store, the display
//! filter, the undo structures, and the persistence collaborator, all
//! constructed once at startup and threaded through execution explicitly
//! (no process-wide state). One call to [`Logic::execute`] runs the whole
//! pipeline for a single input line.

pub mod commands;
pub mod error;
pub mod messages;
pub mod parser;
pub mod undo;

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{ContactStore, Person, Session};
use crate::export::Exporter;
use crate::storage::ContactStorage;
use self::commands::{dispatch, CommandResult, ExecCtx};
use self::undo::{DeleteUndoBuffer, UndoHistory};

/// The active display filter.
///
/// Set by find/listsession/list, reset by undo; delete indexes and export
/// both resolve against the filtered view, not the full store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    NameContains(String),
    SessionIs(Session),
}

impl Filter {
    fn matches(&self, person: &Person) -> bool {
        match self {
            Filter::All => true,
            Filter::NameContains(keyword) => person
                .name
                .as_str()
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
            Filter::SessionIs(session) => person.session.as_ref() == Some(session),
        }
    }

    /// The displayed list: store order, filtered.
    pub(crate) fn apply(&self, store: &ContactStore) -> Vec<Arc<Person>> {
        store
            .persons()
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Executor facade: runs one input line through parse, execution, undo
/// recording, and persistence.
pub struct Logic {
    store: ContactStore,
    filter: Filter,
    history: UndoHistory,
    delete_buffer: DeleteUndoBuffer,
    storage: Box<dyn ContactStorage>,
    exporter: Exporter,
}

impl Logic {
    /// Build a session by loading the store from `storage`.
    pub fn new(storage: Box<dyn ContactStorage>, exporter: Exporter) -> crate::Result<Self> {
        let store = storage.load()?;
        Ok(Self::with_store(store, storage, exporter))
    }

    /// Build a session around an existing store (startup fallback, tests).
    pub fn with_store(
        store: ContactStore,
        storage: Box<dyn ContactStorage>,
        exporter: Exporter,
    ) -> Self {
        Self {
            store,
            filter: Filter::All,
            history: UndoHistory::new(),
            delete_buffer: DeleteUndoBuffer::new(),
            storage,
            exporter,
        }
    }

    /// Execute one raw input line.
    ///
    /// Protocol: parse; execute (validation precedes mutation); on success
    /// record the pre-mutation snapshot under the command's undo label for
    /// snapshot-recording commands; persist after any successful mutation.
    /// A failed save surfaces an error but the in-memory mutation stands —
    /// the recorded snapshot keeps `undo` available as the recovery path.
    pub fn execute(&mut self, input: &str) -> crate::Result<CommandResult> {
        let command = parser::parse(input)?;
        debug!(label = command.undo_label(), "executing command");

        let snapshot = command
            .records_snapshot()
            .then(|| self.store.clone());

        let mut ctx = ExecCtx {
            store: &mut self.store,
            filter: &mut self.filter,
            history: &mut self.history,
            delete_buffer: &mut self.delete_buffer,
            exporter: &self.exporter,
        };
        let result = dispatch(&mut ctx, command.kind())?;

        if let Some(snapshot) = snapshot {
            self.history.record(snapshot, command.undo_label());
        }
        if command.is_state_changing() {
            info!(label = command.undo_label(), "store mutated, persisting");
            self.storage.save(&self.store)?;
        }
        Ok(result)
    }

    /// The currently displayed persons (post most-recent filter change).
    pub fn displayed_persons(&self) -> Vec<Arc<Person>> {
        self.filter.apply(&self.store)
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }
}
