//! Undo the last state-changing command, or restore the last deleted batch.

use std::sync::Arc;

use tracing::info;

use crate::core::Person;
use crate::logic::error::CommandError;
use crate::logic::messages::{self, format_person, format_person_lines};
use crate::logic::Filter;

use super::{CommandResult, ExecCtx};

/// Generic undo: pop the most recent snapshot back into the store.
pub(crate) fn undo(ctx: &mut ExecCtx<'_>) -> Result<CommandResult, CommandError> {
    if !ctx.history.can_undo() {
        return Err(CommandError::NothingToUndo);
    }

    let label = ctx
        .history
        .restore_into(ctx.store)
        .expect("non-empty history restores");
    *ctx.filter = Filter::All;

    let label = if label.is_empty() {
        messages::UNKNOWN_COMMAND_LABEL.to_string()
    } else {
        label
    };
    info!(%label, "command undone");
    Ok(CommandResult::new(format!(
        "Previous command undone: {label}"
    )))
}

/// Narrow undo: re-add the last deleted batch, skipping records that would
/// now be duplicates. Does not touch the snapshot history.
pub(crate) fn undo_delete(ctx: &mut ExecCtx<'_>) -> Result<CommandResult, CommandError> {
    let batch = match ctx.delete_buffer.pop_latest() {
        Some(batch) if !batch.is_empty() => batch,
        _ => return Err(CommandError::NothingToUndoDelete),
    };

    let mut restored: Vec<Arc<Person>> = Vec::new();
    for person in batch {
        if !ctx.store.contains_duplicate(&person) {
            restored.push(ctx.store.add(person.as_ref().clone()));
        }
    }
    info!(count = restored.len(), "deleted persons restored");

    match restored.as_slice() {
        [] => Ok(CommandResult::new(messages::MESSAGE_NOTHING_RESTORED)),
        [only] => Ok(CommandResult::new(format!(
            "Restored Person: {}",
            format_person(only)
        ))),
        _ => Ok(CommandResult::new(format!(
            "Restored Persons:\n{}",
            format_person_lines(&restored)
        ))),
    }
}
