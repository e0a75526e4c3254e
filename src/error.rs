//! Crate-level convenience error.
//!
//! A thin wrapper over the canonical pipeline errors; each stage keeps its
//! own bounded enum and this just lets callers use one `Result` alias.

use thiserror::Error;

use crate::config::ConfigError;
use crate::logic::error::{CommandError, ParseError};
use crate::storage::StorageError;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}
