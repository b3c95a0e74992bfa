//! Flat-file persistence for listing records
//!
//! Records live in a plain text file, one pipe-delimited line per listing
//! (see [`super::codec`]). Adds append a line; purchases rewrite the whole
//! file from the surviving records. Rewrites go through a temp file and an
//! atomic rename, and every access holds an `fs2` lock for the duration of
//! the call.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::Property;

use super::codec;

/// Handle to a listing file on disk.
pub struct ListingFile {
    path: PathBuf,
}

impl ListingFile {
    /// Creates a handle for the given path. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads up to `limit` records, in file order.
    ///
    /// Reading stops at the first line that fails to parse; everything
    /// before it is kept. A missing file yields no records.
    pub fn read(&self, limit: usize) -> Result<Vec<Property>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open listing file: {}", self.path.display()))?;

        // Shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on listing file")?;

        let reader = BufReader::new(&file);
        let mut records = Vec::new();

        for line in reader.lines() {
            let line = line
                .with_context(|| format!("Failed to read listing file: {}", self.path.display()))?;
            let Ok(record) = codec::parse_line(&line) else {
                break;
            };
            records.push(record);
            if records.len() == limit {
                break;
            }
        }

        // Lock is released when file is dropped
        Ok(records)
    }

    /// Appends a single record.
    pub fn append(&self, property: &Property) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open listing file: {}", self.path.display()))?;

        // Exclusive lock for writing
        file.lock_exclusive()
            .context("Failed to acquire write lock on listing file")?;

        let mut writer = BufWriter::new(&file);
        writeln!(writer, "{}", codec::serialize(property)).context("Failed to write record")?;
        writer.flush().context("Failed to flush listing file")?;

        Ok(())
    }

    /// Rewrites the file from scratch with the given records, in order.
    pub fn rewrite<'a>(&self, records: impl IntoIterator<Item = &'a Property>) -> Result<()> {
        // Write to temp file first
        let temp_path = self.path.with_extension("txt.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on listing file")?;

            let mut writer = BufWriter::new(&file);
            for record in records {
                writeln!(writer, "{}", codec::serialize(record))
                    .context("Failed to write record")?;
            }
            writer.flush().context("Failed to flush listing file")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_property(name: &str) -> Property {
        Property {
            name: name.to_string(),
            address: "12 Ocean Drive".to_string(),
            price: 250_000,
            size: 120,
            rooms: 4,
            bathrooms: 2,
            parking: false,
        }
    }

    #[test]
    fn read_missing_file_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let file = ListingFile::new(dir.path().join("properties.txt"));

        assert!(file.read(6).unwrap().is_empty());
    }

    #[test]
    fn append_then_read() {
        let dir = TempDir::new().unwrap();
        let file = ListingFile::new(dir.path().join("properties.txt"));

        file.append(&make_property("First")).unwrap();
        file.append(&make_property("Second")).unwrap();

        let records = file.read(6).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "First");
        assert_eq!(records[1].name, "Second");
    }

    #[test]
    fn read_respects_the_limit() {
        let dir = TempDir::new().unwrap();
        let file = ListingFile::new(dir.path().join("properties.txt"));

        for i in 0..8 {
            file.append(&make_property(&format!("House {}", i))).unwrap();
        }

        assert_eq!(file.read(6).unwrap().len(), 6);
    }

    #[test]
    fn read_stops_at_first_malformed_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("properties.txt");
        fs::write(
            &path,
            "Villa|12 Ocean Drive|250000|120|4|2|1\nnot a record\nCottage|3 Elm Grove|90000|60|2|1|0\n",
        )
        .unwrap();

        let records = ListingFile::new(&path).read(6).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Villa");
    }

    #[test]
    fn rewrite_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let file = ListingFile::new(dir.path().join("properties.txt"));

        file.append(&make_property("Old")).unwrap();

        let keep = [make_property("First"), make_property("Second")];
        file.rewrite(keep.iter()).unwrap();

        let records = file.read(6).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "First");

        // Temp file should not exist after rewrite
        assert!(!file.path().with_extension("txt.tmp").exists());
    }

    #[test]
    fn rewrite_with_no_records_empties_the_file() {
        let dir = TempDir::new().unwrap();
        let file = ListingFile::new(dir.path().join("properties.txt"));

        file.append(&make_property("Gone")).unwrap();
        file.rewrite(std::iter::empty()).unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
    }
}
