//! Command pipeline errors.
//!
//! Two stages, two enums: `ParseError` means the raw line never became a
//! command and no state was touched; `CommandError` means the command was
//! well-formed but violated a domain rule at execution time (validation
//! precedes mutation, so the store is unchanged there too).

use thiserror::Error;

use crate::core::limits::{MAX_PERSON_COUNT, MAX_SESSION_COUNT};
use crate::core::{CoreError, Session};

/// User input malformed before any store access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: String },

    #[error("Keyword to find cannot be empty.")]
    EmptyKeyword,

    #[error(
        "Keyword to find is invalid! Make sure it contains only letters, spaces or - . ' /"
    )]
    InvalidKeyword,

    #[error("Specified session has invalid format. {}", Session::MESSAGE_CONSTRAINTS)]
    InvalidSessionFormat,

    #[error("The provided export path is invalid: {raw}")]
    InvalidPath { raw: String },

    /// A field value failed its constraint; the message is the constraint.
    #[error(transparent)]
    Field(#[from] CoreError),
}

/// Input well-formed but rejected by a domain rule at execution time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandError {
    #[error(
        "This person already exists in the contact list, \
         or the added email cannot belong to multiple people"
    )]
    DuplicatePerson,

    #[error("Students and TAs must have a session")]
    MissingSession,

    #[error("Instructors and staff must not have a session")]
    UnexpectedSession,

    #[error("The contact list has reached the maximum {MAX_PERSON_COUNT} person limit")]
    MaxPersonCountReached,

    #[error("The contact list has reached the maximum {MAX_SESSION_COUNT} session limit")]
    MaxSessionCountReached,

    #[error("The person index provided is invalid")]
    InvalidDisplayedIndex,

    #[error("The person name provided cannot be found in the displayed list: {name}")]
    PersonNotFound { name: String },

    #[error("There is no command to undo.")]
    NothingToUndo,

    #[error("There is no delete operation to undo")]
    NothingToUndoDelete,

    #[error("There are no contacts to export.")]
    NoContactsToExport,

    #[error("Unable to export contacts: {reason}")]
    ExportFailed { reason: String },
}
