//! Example program management for the build output
//!
//! Removes the `examples` directory under the build output and repopulates it
//! from the project's `examples` directory.

use anyhow::{Context, Result};
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of copying an examples tree
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CopyResult {
    pub files: usize,
    pub directories: usize,
    /// Entries that could not be copied, with the reason
    pub errors: Vec<(PathBuf, String)>,
}

impl CopyResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Recursively delete the examples directory.
///
/// Fails if the directory does not exist.
pub fn remove_examples(path: &Path) -> Result<()> {
    fs::remove_dir_all(path)
        .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
    debug!(path = %path.display(), "removed examples directory");
    Ok(())
}

/// Copy `source` into `destination`, which must not exist yet.
///
/// The source is listed before anything is created, so a missing source leaves
/// no destination behind. Symlinks are followed and the files they point to are
/// copied, so the destination never contains links. Entries that fail are
/// skipped; the copy carries on and the failures are reported together at the end.
pub fn copy_examples(source: &Path, destination: &Path) -> Result<CopyResult> {
    let entries = list_dir(source)?;

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    match fs::create_dir(destination) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            anyhow::bail!("Destination already exists: {}", destination.display());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to create directory: {}", destination.display())
            });
        }
    }

    let mut result = CopyResult {
        directories: 1,
        ..CopyResult::default()
    };
    copy_entries(entries, destination, &mut result);

    debug!(
        source = %source.display(),
        destination = %destination.display(),
        files = result.files,
        directories = result.directories,
        errors = result.errors.len(),
        "copied examples"
    );

    if !result.is_success() {
        let details: Vec<String> = result
            .errors
            .iter()
            .map(|(path, error)| format!("{}: {}", path.display(), error))
            .collect();
        anyhow::bail!(
            "Failed to copy {} entries into {}:\n{}",
            result.errors.len(),
            destination.display(),
            details.join("\n")
        );
    }
    Ok(result)
}

fn list_dir(path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory: {}", path.display()))?;

    entries
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read directory: {}", path.display()))
}

fn copy_entries(entries: Vec<PathBuf>, destination: &Path, result: &mut CopyResult) {
    for from in entries {
        let Some(name) = from.file_name() else {
            continue;
        };
        let to = destination.join(name);

        if let Err(e) = copy_entry(&from, &to, result) {
            result.errors.push((from, format!("{e:#}")));
        }
    }
}

fn copy_entry(from: &Path, to: &Path, result: &mut CopyResult) -> Result<()> {
    // fs::metadata follows symlinks; a dangling link fails here
    let metadata = fs::metadata(from)
        .with_context(|| format!("Failed to read metadata: {}", from.display()))?;

    if metadata.is_dir() {
        let entries = list_dir(from)?;
        fs::create_dir(to)
            .with_context(|| format!("Failed to create directory: {}", to.display()))?;
        result.directories += 1;
        copy_entries(entries, to, result);
    } else {
        fs::copy(from, to)
            .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
        // Read-only copies cannot be reopened for writing; their times are left as is
        if let Err(e) = preserve_times(&metadata, to) {
            debug!(path = %to.display(), error = %format!("{e:#}"), "file times not preserved");
        }
        result.files += 1;
    }
    Ok(())
}

/// Carry the source's access and modification times over to a copied file
fn preserve_times(metadata: &fs::Metadata, to: &Path) -> Result<()> {
    let mut times = FileTimes::new().set_modified(
        metadata
            .modified()
            .with_context(|| format!("Failed to read modification time for {}", to.display()))?,
    );
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    File::options()
        .write(true)
        .open(to)
        .and_then(|file| file.set_times(times))
        .with_context(|| format!("Failed to set file times: {}", to.display()))
}
