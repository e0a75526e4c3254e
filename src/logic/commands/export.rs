//! Export the currently displayed persons to a CSV file.

use tracing::info;

use crate::export::ExportTarget;
use crate::logic::error::CommandError;

use super::{CommandResult, ExecCtx};

pub(crate) fn execute(
    ctx: &mut ExecCtx<'_>,
    target: &ExportTarget,
) -> Result<CommandResult, CommandError> {
    let persons = ctx.displayed();
    if persons.is_empty() {
        return Err(CommandError::NoContactsToExport);
    }

    let path = ctx
        .exporter
        .export(target, &persons)
        .map_err(|err| CommandError::ExportFailed {
            reason: err.to_string(),
        })?;
    info!(path = %path.display(), count = persons.len(), "contacts exported");

    Ok(CommandResult::new(format!(
        "Exported {} contact(s) to {}",
        persons.len(),
        path.display()
    )))
}
