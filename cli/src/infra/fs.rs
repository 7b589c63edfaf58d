//! Filesystem infrastructure — implements `AssetFiles` over the local disk.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::AssetFiles;
use crate::domain::FileEntry;

/// Production filesystem implementation of `AssetFiles`.
pub struct LocalFs;

impl AssetFiles for LocalFs {
    fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading file {}", path.display())),
        }
    }

    fn glob_files(&self, pattern: &str) -> Result<Vec<FileEntry>> {
        let paths =
            glob::glob(pattern).with_context(|| format!("invalid glob pattern {pattern}"))?;

        let mut entries = Vec::new();
        for item in paths {
            let path = match item {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable glob entry");
                    continue;
                }
            };
            match std::fs::metadata(&path) {
                Ok(meta) if meta.is_file() => entries.push(FileEntry {
                    path,
                    size: meta.len(),
                }),
                Ok(_) => tracing::debug!(path = %path.display(), "skipping non-file match"),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot stat glob match");
                }
            }
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}
