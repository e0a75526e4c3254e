//! Argument parser for the export command.

use std::path::PathBuf;

use crate::export::ExportTarget;
use crate::logic::commands::CommandKind;
use crate::logic::error::ParseError;

pub(crate) fn parse(args: &str) -> Result<CommandKind, ParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Ok(CommandKind::Export(ExportTarget::default()));
    }
    if trimmed.contains('\0') {
        return Err(ParseError::InvalidPath {
            raw: trimmed.to_string(),
        });
    }

    let looks_like_directory = trimmed.ends_with('/') || trimmed.ends_with('\\');
    let path = PathBuf::from(trimmed);
    let treat_as_directory = looks_like_directory || path.is_dir();

    let path = if !treat_as_directory && !trimmed.to_lowercase().ends_with(".csv") {
        PathBuf::from(format!("{trimmed}.csv"))
    } else {
        path
    };

    Ok(CommandKind::Export(ExportTarget {
        path: Some(path),
        treat_as_directory,
    }))
}
