//! Find persons by case-insensitive name substring.

use crate::logic::error::CommandError;
use crate::logic::messages::format_person_lines;
use crate::logic::Filter;

use super::{CommandResult, ExecCtx};

pub(crate) fn execute(
    ctx: &mut ExecCtx<'_>,
    keyword: &str,
) -> Result<CommandResult, CommandError> {
    *ctx.filter = Filter::NameContains(keyword.to_string());
    let matches = ctx.displayed();
    if matches.is_empty() {
        return Ok(CommandResult::new(format!(
            "Oops, no one's name contains {keyword}"
        )));
    }

    let plural = if matches.len() == 1 { "" } else { "s" };
    Ok(CommandResult::new(format!(
        "{} person{plural} found\n{}",
        matches.len(),
        format_person_lines(&matches)
    )))
}
