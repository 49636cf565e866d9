//! Persists generated documents under the output directory.

use std::fs;
use std::path::{Component, Path};

use anyhow::{bail, Context, Result};

/// Writes `content` to `out_dir/relative`, creating parent directories as needed.
///
/// `relative` must stay inside `out_dir`: absolute paths and `..` are refused.
///
/// # Errors
///
/// Returns an error for an escaping path, or if directories cannot be created
/// or the file cannot be written.
pub fn write_under(out_dir: &Path, relative: &str, content: &str) -> Result<()> {
    let rel = Path::new(relative);
    if rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        bail!("Refusing to write outside the output directory: {relative}");
    }

    let path = out_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory: {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Cannot write sitemap file: {}", path.display()))
}
