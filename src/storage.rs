//! The durable log file.
//!
//! A single flat file holds every entry ever written: one header row
//! naming the column order, then one delimited row per entry. Rows are
//! only ever appended; the sole destructive operation rewrites the file
//! back to just the header.
//!
//! Loading is tolerant: rows that fail to decode (including a partial
//! trailing row left by a crash between two completed writes) are skipped
//! and reported in the snapshot's warning list, while well-formed rows
//! still load. Only an unreadable file or a malformed header is fatal.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Writer, WriterBuilder};

use crate::error::{Error, Result};
use crate::model::LogEntry;
use crate::serde::{self, DecodeFailure, Header};

/// A fully loaded, consistent in-memory view of the log at a point in
/// time. Identifier allocation, filtering, and aggregation all work from
/// a snapshot, never from a partial read.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Successfully decoded entries, in file (insertion) order.
    pub entries: Vec<LogEntry>,
    /// Rows that were skipped as undecodable.
    pub failures: Vec<DecodeFailure>,
}

/// Handle to the log file on disk.
pub(crate) struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with the canonical header if it does not exist.
    pub fn create_if_missing(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.write_header(File::create(&self.path)?)
    }

    /// Loads the whole file into a snapshot.
    ///
    /// Row indexes in the failure list count the header as row 0.
    pub fn load(&self) -> Result<Snapshot> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        let mut records = reader.records();

        let header = match records.next() {
            Some(record) => Header::parse(&record?)?,
            None => {
                return Err(Error::Storage(format!(
                    "log file {:?} is empty, expected a header row",
                    self.path
                )));
            }
        };

        let mut snapshot = Snapshot::default();
        for (row, record) in records.enumerate() {
            let row = row + 1;
            match record {
                Ok(record) => match serde::decode(&header, row, &record) {
                    Ok(entry) => snapshot.entries.push(entry),
                    Err(failure) => snapshot.failures.push(failure),
                },
                Err(err) => snapshot.failures.push(DecodeFailure {
                    row,
                    reason: format!("unreadable row: {err}"),
                }),
            }
        }
        Ok(snapshot)
    }

    /// Appends exactly one encoded row.
    pub fn append_row(&self, entry: &LogEntry) -> Result<()> {
        let mut file = OpenOptions::new().read(true).append(true).open(&self.path)?;

        // A crash can leave the file without a trailing newline; appending
        // directly onto the fragment would merge two rows into one.
        let len = file.metadata()?.len();
        if len > 0 {
            file.seek(SeekFrom::End(-1))?;
            let mut last = [0u8; 1];
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(&serde::encode(entry))?;
        writer.flush().map_err(Error::from)?;
        Ok(())
    }

    /// Rewrites the file to contain only the header row. Irreversible.
    pub fn reset(&self) -> Result<()> {
        self.write_header(File::create(&self.path)?)
    }

    fn write_header(&self, file: File) -> Result<()> {
        let mut writer = Writer::from_writer(file);
        writer.write_record(serde::COLUMNS)?;
        writer.flush().map_err(Error::from)?;
        Ok(())
    }
}
