//! Read-only listing commands: list, listsession, sessions.

use crate::core::Session;
use crate::logic::error::CommandError;
use crate::logic::messages::{self, format_person_lines};
use crate::logic::Filter;

use super::{CommandResult, ExecCtx};

pub(crate) fn list_all(ctx: &mut ExecCtx<'_>) -> Result<CommandResult, CommandError> {
    *ctx.filter = Filter::All;
    let persons = ctx.displayed();
    if persons.is_empty() {
        return Ok(CommandResult::new(messages::MESSAGE_LIST_SUCCESS));
    }
    Ok(CommandResult::new(format!(
        "{}\n{}",
        messages::MESSAGE_LIST_SUCCESS,
        format_person_lines(&persons)
    )))
}

pub(crate) fn list_session(
    ctx: &mut ExecCtx<'_>,
    session: &Session,
) -> Result<CommandResult, CommandError> {
    *ctx.filter = Filter::SessionIs(session.clone());
    let persons = ctx.displayed();
    if persons.is_empty() {
        // Zero matches is still a success, echoing the missing session.
        return Ok(CommandResult::new(format!(
            "Specified session {session} does not exist."
        )));
    }
    Ok(CommandResult::new(format!(
        "{} persons listed!\n{}",
        persons.len(),
        format_person_lines(&persons)
    )))
}

pub(crate) fn sessions(ctx: &mut ExecCtx<'_>) -> Result<CommandResult, CommandError> {
    let mut sessions: Vec<&Session> = ctx.store.counter().sessions().collect();
    if sessions.is_empty() {
        return Ok(CommandResult::new(messages::MESSAGE_NO_SESSIONS));
    }
    sessions.sort_by_key(|s| s.as_str().to_lowercase());
    let listed = sessions
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(CommandResult::new(format!(
        "{} sessions found in TAConnect. Here is the list: {listed}",
        sessions.len()
    )))
}
