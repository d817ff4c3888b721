use anyhow::{Context, bail};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Resolves the top-level directory of the enclosing git working tree.
///
/// This is the only subprocess the tool runs. The selector and builder take
/// the root as a plain path, so tests hand them a fixed directory instead.
pub fn resolve_root() -> anyhow::Result<PathBuf> {
    resolve_root_in(Path::new("."))
}

fn resolve_root_in(dir: &Path) -> anyhow::Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()
        .context("failed to run git")?;

    if !output.status.success() {
        bail!("not a git repository");
    }

    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!("Resolved git root: {root}");
    Ok(PathBuf::from(root))
}
