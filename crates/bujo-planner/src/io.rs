//! Document I/O

use crate::types::*;
use lopdf::Document;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Load a PDF document, e.g. a previously generated planner
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save the planner document
///
/// The document is written to a temporary file next to `path` and only
/// renamed into place once fully written, so a failed save never leaves a
/// truncated file behind. Missing parent directories are created.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let destination = path.clone();
    tokio::task::spawn_blocking(move || write_atomically(&mut doc, &destination)).await??;
    log::info!("Saved planner to {}", path.display());
    Ok(())
}

fn write_atomically(doc: &mut Document, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    let mut file = NamedTempFile::new_in(&dir)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        doc.save_to(&mut writer)?;
        writer.flush()?;
    }
    file.as_file().sync_all()?;
    // keep only the io error so the temporary file is deleted on failure
    file.persist(path).map_err(|e| PlannerError::Persist(e.error))?;
    Ok(())
}
