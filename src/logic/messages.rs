//! User-visible messages shared across commands.
//!
//! Per-command usage strings live next to their parsers; this module holds
//! the wording that more than one place needs.

use std::sync::Arc;

use crate::core::Person;

pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting TAConnect as requested ...";
pub const MESSAGE_CLEAR_SUCCESS: &str = "Contact list has been cleared!";
pub const MESSAGE_LIST_SUCCESS: &str = "Listed all persons";
pub const MESSAGE_NO_SESSIONS: &str = "No sessions found in TAConnect.";
pub const MESSAGE_NOTHING_RESTORED: &str = "No contacts restored (duplicates already exist)";

/// Fallback undo label when the recorded label is blank.
pub const UNKNOWN_COMMAND_LABEL: &str = "unknown";

pub const MESSAGE_HELP: &str = "\
Available commands:
  add n/NAME p/PHONE e/EMAIL t/TYPE [tg/TELEGRAM] [s/SESSION]
                         Add a person (TYPE: student, ta, instructor, staff)
  list                   Show every person
  find KEYWORD           Show persons whose name contains KEYWORD
  listsession SESSION    Show persons in SESSION
  sessions               Show all distinct sessions
  delete TARGETS         Delete by index, range (e.g. 2-4) or n:NAME
  undo                   Undo the most recent data-changing command
  undo delete            Restore the most recently deleted batch
  export [PATH]          Export the shown persons to a CSV file
  clear                  Remove every person
  help                   Show this summary
  exit                   Leave TAConnect";

/// Formats one person for command feedback.
pub fn format_person(person: &Person) -> String {
    person.summary()
}

/// Formats a batch of persons, one per line, in the given order.
pub fn format_person_lines(persons: &[Arc<Person>]) -> String {
    persons
        .iter()
        .map(|p| p.summary())
        .collect::<Vec<_>>()
        .join("\n")
}
