//! Output formatting for the packager CLI.
//!
//! Progress and error lines go to stderr; the completion message with the
//! archive path is the only stdout output of a successful run.

use crate::archive::ArchiveDigest;
use camino::Utf8Path;
use std::io::Write;

/// Write a line to the given stderr sink, ignoring write failures.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

/// Format the completion message for a finished run.
#[must_use]
pub fn success_message(archive_path: &Utf8Path, digest: &ArchiveDigest) -> String {
    format!("Build finished: {archive_path} (sha256 {digest})")
}

/// Resolved configuration for dry-run output.
///
/// # Example
///
/// ```
/// use camino::Utf8PathBuf;
/// use decky_packager::output::DryRunInfo;
///
/// let root = Utf8PathBuf::from("/plugin");
/// let output_dir = Utf8PathBuf::from("/plugin/buildOutput");
/// let info = DryRunInfo {
///     root: &root,
///     output_dir: &output_dir,
///     plugin: "Lossless Scaling",
///     version: "1.2.3",
///     archive: "Lossless Scaling-1.2.3-中文版.zip",
/// };
/// assert!(info.display_text().contains("Dry run"));
/// ```
#[derive(Debug)]
pub struct DryRunInfo<'a> {
    /// Plugin root directory.
    pub root: &'a Utf8Path,
    /// Output directory for the archive.
    pub output_dir: &'a Utf8Path,
    /// Plugin name used for staging and the archive prefix.
    pub plugin: &'a str,
    /// Version resolved from the manifest.
    pub version: &'a str,
    /// Computed archive filename.
    pub archive: &'a str,
}

impl DryRunInfo<'_> {
    /// Format the dry-run information for display.
    #[must_use]
    pub fn display_text(&self) -> String {
        [
            "Dry run - no files will be modified".to_owned(),
            String::new(),
            format!("Plugin root: {}", self.root),
            format!("Output directory: {}", self.output_dir),
            format!("Plugin name: {}", self.plugin),
            format!("Version: {}", self.version),
            format!("Archive: {}", self.archive),
        ]
        .join("\n")
    }
}
