use crate::domain::models::{ContextDocument, DocumentRecord};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Builds one record per selected file, in selector order. Indices are
/// 1-based and contiguous. A file that cannot be read as UTF-8 text keeps
/// its record, with an error placeholder as its content.
pub fn build_document(files: &[PathBuf], root: &Path) -> ContextDocument {
    debug!("Building context document from {} files", files.len());
    let mut records = Vec::with_capacity(files.len());

    for (i, path) in files.iter().enumerate() {
        let source = relative_source(path, root);
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                format!("Error reading file: {e}")
            }
        };

        records.push(DocumentRecord {
            index: i + 1,
            source,
            content,
        });
    }

    ContextDocument { records }
}

// Root-relative path with forward-slash separators on every platform.
fn relative_source(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
