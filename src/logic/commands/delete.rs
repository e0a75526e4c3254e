//! Delete persons selected by displayed index or exact name.

use std::sync::Arc;

use tracing::info;

use crate::core::Person;
use crate::logic::error::CommandError;
use crate::logic::messages::{format_person, format_person_lines};

use super::{CommandResult, ExecCtx, Selector};

pub(crate) fn execute(
    ctx: &mut ExecCtx<'_>,
    selectors: &[Selector],
) -> Result<CommandResult, CommandError> {
    // Resolve every selector against the displayed list before removing
    // anything, so removals cannot shift indices for later selectors.
    let displayed = ctx.displayed();
    let mut targets: Vec<Arc<Person>> = Vec::new();
    for selector in selectors {
        let person = resolve(&displayed, selector)?;
        // Dedup by resolved identity, keeping first-occurrence order.
        if !targets.iter().any(|t| Arc::ptr_eq(t, &person)) {
            targets.push(person);
        }
    }

    for target in &targets {
        ctx.store.remove(target);
    }
    ctx.delete_buffer.push_batch(targets.clone());
    info!(count = targets.len(), "persons deleted");

    if let [only] = targets.as_slice() {
        Ok(CommandResult::new(format!(
            "Deleted Person: {}",
            format_person(only)
        )))
    } else {
        Ok(CommandResult::new(format!(
            "Deleted Persons:\n{}",
            format_person_lines(&targets)
        )))
    }
}

fn resolve(
    displayed: &[Arc<Person>],
    selector: &Selector,
) -> Result<Arc<Person>, CommandError> {
    match selector {
        Selector::Index(one_based) => one_based
            .checked_sub(1)
            .and_then(|i| displayed.get(i))
            .cloned()
            .ok_or(CommandError::InvalidDisplayedIndex),
        Selector::Name(name) => displayed
            .iter()
            .find(|p| p.name == *name)
            .cloned()
            .ok_or_else(|| CommandError::PersonNotFound {
                name: name.to_string(),
            }),
    }
}
