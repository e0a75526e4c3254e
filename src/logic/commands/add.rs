//! Add a person to the contact list.

use tracing::info;

use crate::core::limits::{MAX_PERSON_COUNT, MAX_SESSION_COUNT};
use crate::core::Person;
use crate::logic::error::CommandError;
use crate::logic::messages::format_person;

use super::{CommandResult, ExecCtx};

pub(crate) fn execute(
    ctx: &mut ExecCtx<'_>,
    person: &Person,
) -> Result<CommandResult, CommandError> {
    check_capacity(ctx, person)?;

    // Cross-field rule: students and TAs carry a session, others must not.
    let has_session = person.session.is_some();
    if person.person_type.requires_session() && !has_session {
        return Err(CommandError::MissingSession);
    }
    if !person.person_type.requires_session() && has_session {
        return Err(CommandError::UnexpectedSession);
    }

    if ctx.store.contains_duplicate(person) {
        return Err(CommandError::DuplicatePerson);
    }

    ctx.store.add(person.clone());
    info!(name = %person.name, "person added");
    Ok(CommandResult::new(format!(
        "New person added: {}",
        format_person(person)
    )))
}

fn check_capacity(ctx: &ExecCtx<'_>, person: &Person) -> Result<(), CommandError> {
    let counter = ctx.store.counter();
    if counter.person_count_if_added() > MAX_PERSON_COUNT {
        return Err(CommandError::MaxPersonCountReached);
    }
    if let Some(session) = &person.session
        && counter.unique_session_count_if_added(session) > MAX_SESSION_COUNT
    {
        return Err(CommandError::MaxSessionCountReached);
    }
    Ok(())
}
