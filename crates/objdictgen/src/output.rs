// crates/objdictgen/src/output.rs

//! Writes the two generated documents as a pair.
//!
//! Both documents go to temporary siblings first. They only replace the
//! targets once both temporaries were written. The previous targets are
//! kept as backups until both renames succeeded and are restored otherwise,
//! so a failed run never leaves a fresh header next to a stale definition
//! file.

use crate::error::GenError;
use crate::types::GeneratedFiles;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns the declaration document path belonging to `source_path`.
pub fn header_path_for(source_path: &Path) -> PathBuf {
    source_path.with_extension("h")
}

/// Hidden sibling of `target` carrying `suffix` (`out/.Dev.c.tmp`).
fn sibling_path(target: &Path, suffix: &str) -> Result<PathBuf, GenError> {
    let file_name = target.file_name().ok_or_else(|| {
        GenError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' does not name a file", target.display()),
        ))
    })?;
    let mut sibling = std::ffi::OsString::from(".");
    sibling.push(file_name);
    sibling.push(suffix);
    Ok(target.with_file_name(sibling))
}

/// Temporary sibling used while `target` is being written.
fn staging_path(target: &Path) -> Result<PathBuf, GenError> {
    sibling_path(target, ".tmp")
}

/// Sibling holding the previous content of `target` during a commit.
fn backup_path(target: &Path) -> Result<PathBuf, GenError> {
    sibling_path(target, ".bak")
}

fn discard(paths: &[&Path]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("Could not remove {}: {}", path.display(), e);
            }
        }
    }
}

/// Undoes a partial commit: removes the targets already replaced, then puts
/// every backup back in place.
fn roll_back(placed: &[&Path], backups: &[(PathBuf, &Path)]) {
    discard(placed);
    for (backup, target) in backups {
        if let Err(e) = fs::rename(backup, target) {
            warn!(
                "Could not restore {} from {}: {}",
                target.display(),
                backup.display(),
                e
            );
        }
    }
}

/// Moves every staged file onto its target.
///
/// Existing targets are moved aside first. If any step fails, the targets
/// are restored to what they were before the call.
fn commit(pairs: &[(&Path, &Path)]) -> Result<(), GenError> {
    for (_, target) in pairs {
        if fs::symlink_metadata(target).is_ok_and(|meta| meta.is_dir()) {
            return Err(GenError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is a directory", target.display()),
            )));
        }
    }

    let mut backups: Vec<(PathBuf, &Path)> = Vec::with_capacity(pairs.len());
    for (_, target) in pairs {
        let backup = match backup_path(target) {
            Ok(backup) => backup,
            Err(e) => {
                roll_back(&[], &backups);
                return Err(e);
            }
        };
        match fs::rename(target, &backup) {
            Ok(()) => backups.push((backup, *target)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                roll_back(&[], &backups);
                return Err(e.into());
            }
        }
    }

    let mut placed: Vec<&Path> = Vec::with_capacity(pairs.len());
    for (staged, target) in pairs {
        if let Err(e) = fs::rename(staged, target) {
            roll_back(&placed, &backups);
            return Err(e.into());
        }
        placed.push(*target);
    }

    for (backup, _) in &backups {
        if let Err(e) = fs::remove_file(backup) {
            warn!("Could not remove backup {}: {}", backup.display(), e);
        }
    }
    Ok(())
}

/// Writes `files.source` to `source_path` and `files.header` to `header_path`.
pub fn write_pair(
    source_path: &Path,
    header_path: &Path,
    files: &GeneratedFiles,
) -> Result<(), GenError> {
    let source_staged = staging_path(source_path)?;
    let header_staged = staging_path(header_path)?;

    let staged = fs::write(&source_staged, &files.source)
        .and_then(|()| fs::write(&header_staged, &files.header));
    if let Err(e) = staged {
        discard(&[source_staged.as_path(), header_staged.as_path()]);
        return Err(e.into());
    }

    let committed = commit(&[
        (source_staged.as_path(), source_path),
        (header_staged.as_path(), header_path),
    ]);
    if let Err(e) = committed {
        discard(&[source_staged.as_path(), header_staged.as_path()]);
        return Err(e);
    }
    debug!(
        "Wrote {} and {}",
        source_path.display(),
        header_path.display()
    );
    Ok(())
}
