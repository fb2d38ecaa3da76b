//! Packaging pipeline orchestration.
//!
//! Ties the run together: load the manifest, resolve the archive name,
//! assemble the staging directory, write the archive, digest it, and let
//! the staging guard remove the transient tree.

use crate::archive::{ArchiveDigest, compute_sha256, create_archive};
use crate::error::Result;
use crate::layout::PackageLayout;
use crate::manifest::{PluginVersion, load_manifest};
use crate::naming::ArchiveName;
use crate::output::write_stderr_line;
use crate::stager::Stager;
use camino::Utf8PathBuf;
use std::fs;
use std::io::Write;

/// Context for a packaging pipeline run.
#[derive(Debug)]
pub struct PipelineContext<'a> {
    /// Resolved filesystem layout.
    pub layout: &'a PackageLayout,
    /// Suffix embedded in the archive filename.
    pub suffix: &'a str,
    /// Suppress progress output.
    pub quiet: bool,
}

/// Output produced by a successful [`package_plugin`] run.
#[derive(Debug)]
pub struct PackageOutput {
    /// Path to the written archive.
    pub archive_path: Utf8PathBuf,
    /// Version resolved from the manifest.
    pub version: PluginVersion,
    /// SHA-256 digest of the archive.
    pub digest: ArchiveDigest,
}

/// Run the full packaging sequence.
///
/// Progress is written to `stderr` unless the context is quiet. On return
/// the staging directory is gone, whatever the outcome; the archive exists
/// only on success.
///
/// # Errors
///
/// Propagates manifest, staging, and archive errors; the first failure
/// aborts the run.
pub fn package_plugin(
    context: &PipelineContext<'_>,
    stderr: &mut dyn Write,
) -> Result<PackageOutput> {
    let layout = context.layout;
    let manifest = load_manifest(&layout.manifest_path())?;
    let version = manifest.version();
    let archive_name = ArchiveName::new(layout.plugin().clone(), version.clone(), context.suffix);
    let archive_path = layout.archive_path(&archive_name);

    fs::create_dir_all(layout.output_dir())?;

    if !context.quiet {
        write_stderr_line(
            stderr,
            format!("Staging {} {version}...", layout.plugin()),
        );
    }
    let staging = Stager::new(layout).prepare()?;

    if !context.quiet {
        write_stderr_line(stderr, format!("Writing {archive_path}..."));
    }
    create_archive(staging.path(), layout.output_dir(), &archive_path)?;
    let digest = compute_sha256(&archive_path)?;
    drop(staging);

    Ok(PackageOutput {
        archive_path,
        version,
        digest,
    })
}
