//! Command variants and their execution.
//!
//! Commands are a closed tagged union: parsing produces a [`Command`]
//! (kind + undo label), and [`dispatch`] is the single place where a kind is
//! executed against the store. The snapshot/persist wrapping around dispatch
//! lives in [`Logic::execute`](super::Logic::execute), so no variant has to
//! repeat it.

mod add;
mod delete;
mod export;
mod find;
mod list;
mod undo;

use std::sync::Arc;

use crate::core::{ContactStore, Name, Person, Session};
use crate::export::{ExportTarget, Exporter};
use crate::logic::error::CommandError;
use crate::logic::messages;
use crate::logic::undo::{DeleteUndoBuffer, UndoHistory};
use crate::logic::Filter;

/// Feedback from a successfully executed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    fn exit(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}

/// A delete target: 1-based displayed index, or exact name match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Index(usize),
    Name(Name),
}

/// The closed set of command kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Add(Box<Person>),
    Delete(Vec<Selector>),
    Clear,
    Find(String),
    List,
    ListSession(Session),
    Sessions,
    Export(ExportTarget),
    Undo,
    UndoDelete,
    Help,
    Exit,
}

/// A parsed command: its kind plus the undo label (the raw command word the
/// user typed, alias spelling preserved).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    kind: CommandKind,
    undo_label: String,
}

impl Command {
    pub(crate) fn new(kind: CommandKind, undo_label: impl Into<String>) -> Self {
        Self {
            kind,
            undo_label: undo_label.into(),
        }
    }

    pub fn kind(&self) -> &CommandKind {
        &self.kind
    }

    pub fn undo_label(&self) -> &str {
        &self.undo_label
    }

    /// Whether executing this command mutates the contact store.
    pub fn is_state_changing(&self) -> bool {
        matches!(
            self.kind,
            CommandKind::Add(_)
                | CommandKind::Delete(_)
                | CommandKind::Clear
                | CommandKind::Undo
                | CommandKind::UndoDelete
        )
    }

    /// Whether a pre-mutation snapshot should be recorded for this command.
    ///
    /// Undo and undo-delete mutate the store but only pop from the undo
    /// structures; recording them would make an undo of an undo grow the
    /// stack without bound.
    pub(crate) fn records_snapshot(&self) -> bool {
        matches!(
            self.kind,
            CommandKind::Add(_) | CommandKind::Delete(_) | CommandKind::Clear
        )
    }
}

/// Mutable view of the session state a command may touch.
pub(crate) struct ExecCtx<'a> {
    pub store: &'a mut ContactStore,
    pub filter: &'a mut Filter,
    pub history: &'a mut UndoHistory,
    pub delete_buffer: &'a mut DeleteUndoBuffer,
    pub exporter: &'a Exporter,
}

impl ExecCtx<'_> {
    /// The displayed list: store order filtered by the active filter.
    pub(crate) fn displayed(&self) -> Vec<Arc<Person>> {
        self.filter.apply(self.store)
    }
}

/// Execute one command kind against the session state.
pub(crate) fn dispatch(
    ctx: &mut ExecCtx<'_>,
    kind: &CommandKind,
) -> Result<CommandResult, CommandError> {
    match kind {
        CommandKind::Add(person) => add::execute(ctx, person),
        CommandKind::Delete(selectors) => delete::execute(ctx, selectors),
        CommandKind::Clear => {
            ctx.store.replace_all(Vec::new());
            Ok(CommandResult::new(messages::MESSAGE_CLEAR_SUCCESS))
        }
        CommandKind::Find(keyword) => find::execute(ctx, keyword),
        CommandKind::List => list::list_all(ctx),
        CommandKind::ListSession(session) => list::list_session(ctx, session),
        CommandKind::Sessions => list::sessions(ctx),
        CommandKind::Export(target) => export::execute(ctx, target),
        CommandKind::Undo => undo::undo(ctx),
        CommandKind::UndoDelete => undo::undo_delete(ctx),
        CommandKind::Help => Ok(CommandResult::new(messages::MESSAGE_HELP)),
        CommandKind::Exit => Ok(CommandResult::exit(messages::MESSAGE_EXIT_ACKNOWLEDGEMENT)),
    }
}
