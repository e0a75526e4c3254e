//! CSV export of the currently displayed persons.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::core::Person;

const FILE_NAME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]-[hour][minute][second]");

/// Where an export command writes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportTarget {
    /// User-supplied path; `None` means the configured export directory.
    pub path: Option<PathBuf>,
    /// Treat `path` as a directory even if it does not exist yet.
    pub treat_as_directory: bool,
}

/// Writes CSV exports, generating timestamped file names for directory
/// targets. The clock is injectable so tests get stable names.
pub struct Exporter {
    export_dir: PathBuf,
    clock: fn() -> OffsetDateTime,
}

impl Exporter {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(export_dir, OffsetDateTime::now_utc)
    }

    pub fn with_clock(export_dir: impl Into<PathBuf>, clock: fn() -> OffsetDateTime) -> Self {
        Self {
            export_dir: export_dir.into(),
            clock,
        }
    }

    /// Write `persons` to the resolved target, returning the path written.
    ///
    /// Explicit file targets refuse to overwrite an existing file.
    pub fn export(&self, target: &ExportTarget, persons: &[Arc<Person>]) -> io::Result<PathBuf> {
        let path = self.resolve_path(target)?;
        write_csv(&path, persons)?;
        Ok(path)
    }

    fn resolve_path(&self, target: &ExportTarget) -> io::Result<PathBuf> {
        let Some(path) = &target.path else {
            fs::create_dir_all(&self.export_dir)?;
            return Ok(self.export_dir.join(self.file_name()));
        };

        if target.treat_as_directory || path.is_dir() {
            fs::create_dir_all(path)?;
            return Ok(path.join(self.file_name()));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(path.clone())
    }

    fn file_name(&self) -> String {
        let timestamp = (self.clock)()
            .format(FILE_NAME_FORMAT)
            .expect("file name format is total");
        format!("contacts-{timestamp}.csv")
    }
}

fn write_csv(path: &Path, persons: &[Arc<Person>]) -> io::Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| {
            if err.kind() == io::ErrorKind::AlreadyExists {
                io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("File already exists: {}", path.display()),
                )
            } else {
                err
            }
        })?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(["Name", "Telegram", "Email", "Type", "Session"])
        .map_err(io::Error::other)?;
    for person in persons {
        writer
            .write_record([
                person.name.as_str(),
                person.telegram.as_ref().map_or("", |t| t.as_str()),
                person.email.as_str(),
                person.person_type.as_str(),
                person.session.as_ref().map_or("", |s| s.as_str()),
            ])
            .map_err(io::Error::other)?;
    }
    writer.flush()?;
    Ok(())
}
