use crate::domain::models::SelectionCriteria;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Finds the Godot source files to pack: every `.gd` file under `root`,
/// plus `.tscn` files when scenes are requested, filtered by size and by
/// the `tests`/`addons` path-segment rules.
///
/// The result keeps discovery order: the `.gd` group first, then the scene
/// group, each in recursive walk order. It is never sorted.
pub fn find_project_files(
    root: &Path,
    criteria: &SelectionCriteria,
) -> anyhow::Result<Vec<PathBuf>> {
    info!("Scanning for project files in {}", root.display());

    let mut candidates = collect_by_extension(root, "gd");
    if criteria.include_scenes {
        candidates.extend(collect_by_extension(root, "tscn"));
    }
    debug!("Found {} candidate files", candidates.len());

    let mut selected = Vec::new();
    for path in candidates {
        if should_include(&path, criteria)? {
            selected.push(path);
        }
    }

    info!("Selected {} files", selected.len());
    Ok(selected)
}

fn collect_by_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some(extension))
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Applies the size bound and the path-segment rules to one candidate.
/// A stat failure here is fatal; the caller propagates it.
fn should_include(path: &Path, criteria: &SelectionCriteria) -> anyhow::Result<bool> {
    let size = path.metadata()?.len();
    if size > criteria.max_size_kb.saturating_mul(1024) {
        warn!(
            "Skipping {}: exceeds {}KB size limit",
            path.display(),
            criteria.max_size_kb
        );
        return Ok(false);
    }

    if !criteria.include_tests && has_segment(path, "tests") {
        debug!("Skipping test file: {}", path.display());
        return Ok(false);
    }

    if !criteria.include_addons && has_segment(path, "addons") {
        debug!("Skipping addon file: {}", path.display());
        return Ok(false);
    }

    Ok(true)
}

// Matches any path component literally named `name`, wherever it appears.
fn has_segment(path: &Path, name: &str) -> bool {
    path.components().any(|c| c.as_os_str() == name)
}
