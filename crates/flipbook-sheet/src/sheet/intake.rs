//! Input intake: collecting named image blobs and staging them for one
//! generate pass

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::types::Result;

/// One raw input image: bytes plus the name it arrived with
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceImage {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Read every regular file in a directory as a source image.
///
/// No filtering happens here: hidden names are excluded (and counted)
/// during staging, and files that are not images fall under the
/// decode-skip policy later. Entries are ordered by name so the
/// stable sort sees a deterministic input sequence.
pub async fn load_source_images(dir: impl AsRef<Path>) -> Result<Vec<SourceImage>> {
    let mut entries = tokio::fs::read_dir(dir.as_ref()).await?;
    let mut images = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let bytes = tokio::fs::read(entry.path()).await?;
        images.push(SourceImage { name, bytes });
    }

    images.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(images)
}

/// Hidden-file check on the final name component. A leading dot covers
/// both plain hidden files (".DS_Store") and macOS resource forks
/// ("._photo.jpg").
pub(crate) fn is_hidden_name(name: &str) -> bool {
    match Path::new(name).file_name().and_then(|n| n.to_str()) {
        Some(n) => n.starts_with('.'),
        None => true,
    }
}

/// Inputs written out to a scratch directory for one pass.
///
/// Owns the directory: dropping this value removes every staged file,
/// whichever way the pass ends.
pub(crate) struct StagedInput {
    _dir: TempDir,
    pub paths: Vec<PathBuf>,
    pub skipped_hidden: usize,
}

/// Write the visible inputs into a fresh temp directory, counting the
/// hidden names that were dropped.
pub(crate) fn stage_inputs(images: &[SourceImage]) -> Result<StagedInput> {
    let dir = TempDir::new()?;
    let mut paths = Vec::new();
    let mut skipped_hidden = 0;

    for image in images {
        // Only the name component is used, so inputs cannot escape the
        // staging directory.
        let file_name = match Path::new(&image.name).file_name() {
            Some(n) if !is_hidden_name(&n.to_string_lossy()) => n.to_owned(),
            _ => {
                skipped_hidden += 1;
                continue;
            }
        };
        let path = dir.path().join(file_name);
        std::fs::write(&path, &image.bytes)?;
        paths.push(path);
    }

    Ok(StagedInput {
        _dir: dir,
        paths,
        skipped_hidden,
    })
}
