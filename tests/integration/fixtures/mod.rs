//! Shared fixtures: a person builder, an in-memory storage stub with
//! failure injection, and a fully wired logic harness.

use std::io;
use std::sync::{Arc, Mutex};

use taconnect::core::{
    ContactStore, Email, Name, Person, PersonType, Phone, Session, TelegramHandle,
};
use taconnect::export::Exporter;
use taconnect::storage::{ContactStorage, StorageError};
use taconnect::Logic;
use tempfile::TempDir;
use time::macros::datetime;
use time::OffsetDateTime;

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_TELEGRAM: &str = "@amybee";
pub const DEFAULT_SESSION: &str = "G1";

pub struct PersonBuilder {
    name: String,
    phone: String,
    email: String,
    person_type: PersonType,
    telegram: Option<String>,
    session: Option<String>,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            phone: DEFAULT_PHONE.into(),
            email: DEFAULT_EMAIL.into(),
            person_type: PersonType::Student,
            telegram: Some(DEFAULT_TELEGRAM.into()),
            session: Some(DEFAULT_SESSION.into()),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.into();
        self
    }

    pub fn person_type(mut self, person_type: PersonType) -> Self {
        self.person_type = person_type;
        self
    }

    pub fn telegram(mut self, telegram: Option<&str>) -> Self {
        self.telegram = telegram.map(Into::into);
        self
    }

    pub fn session(mut self, session: Option<&str>) -> Self {
        self.session = session.map(Into::into);
        self
    }

    pub fn build(self) -> Person {
        Person::new(
            Name::parse(self.name).unwrap(),
            Phone::parse(self.phone).unwrap(),
            Email::parse(self.email).unwrap(),
            self.person_type,
            self.telegram.map(|t| TelegramHandle::parse(t).unwrap()),
            self.session.map(|s| Session::parse(s).unwrap()),
        )
    }
}

/// How the storage stub should fail on save.
#[derive(Clone, Copy, Debug)]
pub enum SaveFailure {
    Io,
    PermissionDenied,
}

#[derive(Default)]
struct MemoryStorageState {
    last_saved: Option<ContactStore>,
    save_count: usize,
    fail_with: Option<SaveFailure>,
}

/// In-memory storage stub: records saves, can be told to fail.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryStorageState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_saves(&self, failure: SaveFailure) {
        self.state.lock().unwrap().fail_with = Some(failure);
    }

    pub fn save_count(&self) -> usize {
        self.state.lock().unwrap().save_count
    }

    pub fn last_saved(&self) -> Option<ContactStore> {
        self.state.lock().unwrap().last_saved.clone()
    }
}

impl ContactStorage for MemoryStorage {
    fn load(&self) -> Result<ContactStore, StorageError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .last_saved
            .clone()
            .unwrap_or_default())
    }

    fn save(&self, store: &ContactStore) -> Result<(), StorageError> {
        let mut state = self.state.lock().unwrap();
        match state.fail_with {
            Some(SaveFailure::Io) => Err(StorageError::Io {
                source: io::Error::other("dummy IO exception"),
            }),
            Some(SaveFailure::PermissionDenied) => Err(StorageError::PermissionDenied {
                path: "contacts.json".into(),
            }),
            None => {
                state.last_saved = Some(store.clone());
                state.save_count += 1;
                Ok(())
            }
        }
    }
}

pub fn fixed_clock() -> OffsetDateTime {
    datetime!(2024-03-04 05:06:07 UTC)
}

/// A wired-up logic session over in-memory storage and a temp export dir.
pub struct Harness {
    pub logic: Logic,
    pub storage: MemoryStorage,
    pub export_dir: std::path::PathBuf,
    _tempdir: TempDir,
}

pub fn harness() -> Harness {
    harness_with(Vec::new())
}

pub fn harness_with(persons: Vec<Person>) -> Harness {
    let storage = MemoryStorage::new();
    let tempdir = tempfile::tempdir().unwrap();
    let export_dir = tempdir.path().join("exports");
    let exporter = Exporter::with_clock(&export_dir, fixed_clock);

    let mut store = ContactStore::new();
    for person in persons {
        store.add(person);
    }
    let logic = Logic::with_store(store, Box::new(storage.clone()), exporter);
    Harness {
        logic,
        storage,
        export_dir,
        _tempdir: tempdir,
    }
}

/// Five students in sessions G1, G1, T2, T2, T3, emails a..e@x.com.
pub fn typical_five() -> Vec<Person> {
    let names = ["Alice Tan", "Benson Lee", "Carl Wu", "Daniel Ho", "Elle Koh"];
    let sessions = ["G1", "G1", "T2", "T2", "T3"];
    names
        .iter()
        .zip(sessions)
        .enumerate()
        .map(|(i, (name, session))| {
            PersonBuilder::new()
                .name(name)
                .email(&format!("{}@x.com", (b'a' + i as u8) as char))
                .telegram(None)
                .session(Some(session))
                .build()
        })
        .collect()
}
