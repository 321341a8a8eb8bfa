//! JSON output file writer

use crate::enrich::OutputRecord;
use crate::TrendingError;
use std::fs::Permissions;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes records to `output_path` as a pretty-printed JSON array
///
/// The array is written to a temporary file in the same directory and then
/// renamed over the target, so the previous content is replaced in full
/// and never observed half-written. The replacement keeps the target's
/// permissions; a new file is created world-readable (0644 on Unix).
///
/// # Arguments
///
/// * `records` - The records, in output order
/// * `output_path` - Path of the JSON file to replace
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the file
/// * `Err(TrendingError::Io)` - The parent directory is missing or not writable
/// * `Err(TrendingError::Json)` - Serialization failed
pub fn write_records(records: &[OutputRecord], output_path: &Path) -> Result<(), TrendingError> {
    let parent = match output_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent)?;
    serde_json::to_writer_pretty(&mut file, records)?;
    file.write_all(b"\n")?;
    if let Some(permissions) = target_permissions(output_path) {
        file.as_file().set_permissions(permissions)?;
    }
    file.as_file().sync_all()?;

    file.persist(output_path).map_err(|e| e.error)?;

    tracing::debug!("Wrote {} records to {}", records.len(), output_path.display());
    Ok(())
}

/// Permissions the written file should end up with
///
/// Temporary files are created 0600, which would hide the output from a
/// server running as another user.
fn target_permissions(output_path: &Path) -> Option<Permissions> {
    match std::fs::metadata(output_path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Reads an output file back into records
pub fn read_records(path: &Path) -> Result<Vec<OutputRecord>, TrendingError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
