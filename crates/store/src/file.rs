//! `.dat` file round-trip for registry snapshots.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{Result, StoreError};
use crate::schema::RegistrySnapshot;

fn check_extension(path: &Path) -> Result<()> {
    if path.extension().and_then(|e| e.to_str()) != Some("dat") {
        return Err(StoreError::NotADatFile {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// Writes a snapshot to a `.dat` file, replacing any previous content.
pub fn save_to(path: impl AsRef<Path>, snapshot: &RegistrySnapshot) -> Result<()> {
    let path = path.as_ref();
    check_extension(path)?;
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), snapshot)?;
    tracing::info!(path = %path.display(), "registry saved");
    Ok(())
}

/// Reads a snapshot back from a `.dat` file.
pub fn load_from(path: impl AsRef<Path>) -> Result<RegistrySnapshot> {
    let path = path.as_ref();
    check_extension(path)?;
    let file = File::open(path)?;
    let snapshot = serde_json::from_reader(BufReader::new(file))?;
    tracing::info!(path = %path.display(), "registry loaded");
    Ok(snapshot)
}
