#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod logic;
mod paths;
pub mod storage;
pub mod telemetry;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::core::{
    ContactStore, Counter, Email, Name, Person, PersonType, Phone, Session, TelegramHandle,
};
pub use crate::logic::Logic;
