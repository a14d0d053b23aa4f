use crate::errors::Result;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// A single delimited table backed by one file with a fixed header row.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    header: &'static [&'static str],
}

impl RecordStore {
    /// Describes the table at `path`; nothing is read until [`RecordStore::load`].
    pub fn new(path: impl Into<PathBuf>, header: &'static [&'static str]) -> Self {
        Self {
            path: path.into(),
            header,
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path rendered for log lines and error messages.
    #[must_use]
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Reads every data row of the table, in file order.
    ///
    /// A missing or zero-length file is created with only the header row and
    /// yields no rows. A header that differs from the expected one is logged and
    /// skipped like any other header.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, or if the header
    /// row cannot be written when creating it.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<StringRecord>> {
        if self.is_blank()? {
            debug!("Table file missing or empty, creating it with header only");
            self.overwrite(&[])?;
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let found = reader.headers()?.clone();
        if !found.iter().eq(self.header.iter().copied()) {
            warn!(
                "Unexpected header in {}: found {:?}, expected {:?}",
                self.path.display(),
                found,
                self.header
            );
        }

        let rows = reader
            .records()
            .filter(|row| row.as_ref().map_or(true, |r| !r.iter().all(str::is_empty)))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!("Loaded {} rows", rows.len());
        Ok(rows)
    }

    /// Replaces the whole file with the header followed by `rows`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    #[instrument(skip(self, rows), fields(path = %self.path.display(), rows = rows.len()))]
    pub fn overwrite(&self, rows: &[StringRecord]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(self.header)?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        debug!("Table rewritten");
        Ok(())
    }

    /// Adds `rows` to the end of the file without touching existing content.
    ///
    /// The header is written first when the file is missing or empty, so the
    /// table always starts with it. When the last existing row has no line
    /// terminator one is added first, so new rows never run into it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened for appending or written.
    #[instrument(skip(self, rows), fields(path = %self.path.display(), rows = rows.len()))]
    pub fn append(&self, rows: &[StringRecord]) -> Result<()> {
        let needs_header = self.is_blank()?;
        let needs_terminator = !needs_header && !self.ends_with_newline()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_terminator {
            debug!("Last row has no line terminator, adding one");
            file.write_all(b"\n")?;
        }
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer.write_record(self.header)?;
        }
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        debug!("Rows appended");
        Ok(())
    }

    fn ends_with_newline(&self) -> Result<bool> {
        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0_u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }

    fn is_blank(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}
