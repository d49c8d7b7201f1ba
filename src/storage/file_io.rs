//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

/// Read a whole text file, returning `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, ExpenseError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| ExpenseError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, ExpenseError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ExpenseError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left untouched.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ExpenseError> {
    write_atomic(path.as_ref(), |writer| {
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| ExpenseError::Storage(format!("Failed to write data: {}", e)))
    })
}

/// Write pretty JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| ExpenseError::Storage(format!("Failed to serialize data: {}", e)))
    })
}

fn write_atomic<F>(path: &Path, write: F) -> Result<(), ExpenseError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ExpenseError>,
{
    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let result = write_temp(temp_path, write).and_then(|()| {
        fs::rename(temp_path, path)
            .map_err(|e| ExpenseError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(temp_path);
    }
    result
}

fn write_temp<F>(temp_path: &Path, write: F) -> Result<(), ExpenseError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ExpenseError>,
{
    let file = File::create(temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write(&mut writer)?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))
}
