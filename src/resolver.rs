//! Input path resolution and working-directory confinement

use crate::error::{Result, SamplerError};
use std::path::{Component, Path, PathBuf};

/// Resolve a user-supplied filename against a base directory.
///
/// The filename is joined to the base directory and normalized the way
/// the filesystem sees it: symlinks are followed wherever the prefix
/// exists on disk, and `.`/`..` components are applied to whatever has
/// been resolved so far. The final path itself does not have to exist.
///
/// Fails with [`SamplerError::PathEscape`] when the normalized path is
/// not inside the base directory.
pub fn resolve_input_path(base: &Path, filename: &str) -> Result<PathBuf> {
    let base = base.canonicalize()?;
    let joined = base.join(filename);

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            _ => {
                resolved.push(component);
                // Follow symlinks on every existing prefix so a link cannot
                // smuggle the path out of the base directory.
                if let Ok(canonical) = resolved.canonicalize() {
                    resolved = canonical;
                }
            }
        }
    }

    if !resolved.starts_with(&base) {
        log::debug!(
            "rejected {} (outside {})",
            resolved.display(),
            base.display()
        );
        return Err(SamplerError::PathEscape);
    }

    Ok(resolved)
}
