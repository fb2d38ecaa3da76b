//! Staging directory assembly.
//!
//! This module builds the transient distribution folder: it recreates the
//! staging directory from scratch, copies the mandatory build output, the
//! optional directories, and the best-effort required file list into it.
//! The returned [`StagingGuard`] owns the tree and removes it on drop, so
//! a failure partway through a run cannot leak a half-populated folder.

use crate::error::{PackagerError, Result};
use crate::layout::{BUILD_OUTPUT_DIR, OPTIONAL_DIRS, PackageLayout, REQUIRED_FILES};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Assembles the staging directory for a packaging run.
pub struct Stager<'a> {
    layout: &'a PackageLayout,
}

impl<'a> Stager<'a> {
    /// Create a stager over the given layout.
    #[must_use]
    pub fn new(layout: &'a PackageLayout) -> Self {
        Self { layout }
    }

    /// Build a fresh staging directory and populate it.
    ///
    /// Any pre-existing staging directory is removed first. After this
    /// call the staging directory contains the build output, every present
    /// optional directory, and every present required file.
    ///
    /// # Errors
    ///
    /// Returns [`PackagerError::MissingBuildOutput`] if the mandatory
    /// build output directory is absent, and propagates any filesystem
    /// error encountered while copying.
    pub fn prepare(&self) -> Result<StagingGuard> {
        let staging = self.layout.staging_dir();
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        fs::create_dir_all(&staging)?;
        log::debug!("staging {} into {staging}", self.layout.plugin());

        // The guard owns the tree from here; an error below removes it.
        let guard = StagingGuard::new(staging);
        self.copy_build_output(guard.path())?;
        self.copy_optional_dirs(guard.path())?;
        self.copy_required_files(guard.path())?;
        Ok(guard)
    }

    /// Copy the mandatory build output directory into staging.
    fn copy_build_output(&self, staging: &Utf8Path) -> Result<()> {
        let source = self.layout.build_output_dir();
        if !source.is_dir() {
            return Err(PackagerError::MissingBuildOutput { path: source });
        }
        copy_tree(&source, &staging.join(BUILD_OUTPUT_DIR))
    }

    /// Copy each optional directory into staging when present.
    fn copy_optional_dirs(&self, staging: &Utf8Path) -> Result<()> {
        for name in OPTIONAL_DIRS {
            let source = self.layout.source_dir(name);
            if source.is_dir() {
                copy_tree(&source, &staging.join(name))?;
            } else {
                log::trace!("optional directory {name} absent, skipping");
            }
        }
        Ok(())
    }

    /// Copy each required file into the staging root when present.
    ///
    /// The list is advisory: absent files are skipped without error.
    fn copy_required_files(&self, staging: &Utf8Path) -> Result<()> {
        for name in REQUIRED_FILES {
            let source = self.layout.source_dir(name);
            if !source.is_file() {
                log::debug!("required file {name} absent, skipping");
                continue;
            }
            let dest = staging.join(name);
            fs::copy(&source, &dest).map_err(|e| PackagerError::StagingFailed {
                reason: format!("failed to copy {source} to {dest}: {e}"),
            })?;
        }
        Ok(())
    }
}

/// RAII handle for the staging directory.
///
/// Dropping the guard removes the staging tree, on both the success path
/// (after the archive is written) and every error path.
#[derive(Debug)]
pub struct StagingGuard {
    path: Utf8PathBuf,
}

impl StagingGuard {
    fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }

    /// Return the staging directory path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl Drop for StagingGuard {
    fn drop(&mut self) {
        // Best-effort removal; a failure here must not mask the run result.
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Recursively copy a directory tree.
fn copy_tree(source: &Utf8Path, dest: &Utf8Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in source.read_dir_utf8()? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
