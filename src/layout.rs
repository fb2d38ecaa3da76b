//! Filesystem layout of a packaging run.
//!
//! This module fixes the names the packager looks for in the plugin root
//! and derives every path a run touches: the manifest, the mandatory and
//! optional source directories, the transient staging directory, and the
//! final archive location.

use crate::naming::ArchiveName;
use crate::plugin_name::PluginName;
use camino::{Utf8Path, Utf8PathBuf};

/// Manifest filename looked up in the plugin root.
pub const MANIFEST_FILE: &str = "package.json";

/// The mandatory frontend build output directory.
pub const BUILD_OUTPUT_DIR: &str = "dist";

/// Directories copied wholesale into staging when present.
pub const OPTIONAL_DIRS: [&str; 2] = ["bin", "py_modules"];

/// Files copied into the staging root when present.
///
/// The list is advisory: an absent entry is skipped silently rather than
/// failing the run.
pub const REQUIRED_FILES: [&str; 7] = [
    "package.json",
    "plugin.json",
    "LICENSE",
    "main.py",
    "README.md",
    "defaults.txt",
    "shared_config.py",
];

/// Default output directory name, created under the plugin root.
pub const DEFAULT_OUTPUT_DIR: &str = "buildOutput";

/// Resolved paths for a single packaging run.
///
/// # Examples
///
/// ```
/// use camino::Utf8PathBuf;
/// use decky_packager::layout::PackageLayout;
/// use decky_packager::plugin_name::PluginName;
///
/// let layout = PackageLayout::with_default_output(
///     Utf8PathBuf::from("/plugin"),
///     PluginName::from("Lossless Scaling"),
/// );
/// assert_eq!(layout.manifest_path(), "/plugin/package.json");
/// assert_eq!(layout.staging_dir(), "/plugin/buildOutput/Lossless Scaling");
/// ```
#[derive(Debug, Clone)]
pub struct PackageLayout {
    root: Utf8PathBuf,
    output_dir: Utf8PathBuf,
    plugin: PluginName,
}

impl PackageLayout {
    /// Create a layout with an explicit output directory.
    #[must_use]
    pub fn new(root: Utf8PathBuf, output_dir: Utf8PathBuf, plugin: PluginName) -> Self {
        Self {
            root,
            output_dir,
            plugin,
        }
    }

    /// Create a layout whose output directory is the default one under the
    /// plugin root.
    #[must_use]
    pub fn with_default_output(root: Utf8PathBuf, plugin: PluginName) -> Self {
        let output_dir = root.join(DEFAULT_OUTPUT_DIR);
        Self::new(root, output_dir, plugin)
    }

    /// Return the plugin root directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Return the output directory that receives the final archive.
    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    /// Return the plugin name.
    #[must_use]
    pub fn plugin(&self) -> &PluginName {
        &self.plugin
    }

    /// Return the path of the plugin manifest.
    #[must_use]
    pub fn manifest_path(&self) -> Utf8PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Return the path of the mandatory build output directory.
    #[must_use]
    pub fn build_output_dir(&self) -> Utf8PathBuf {
        self.root.join(BUILD_OUTPUT_DIR)
    }

    /// Return the path of an optional source directory by name.
    #[must_use]
    pub fn source_dir(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Return the transient staging directory for this run.
    ///
    /// The staging directory lives inside the output directory and carries
    /// the plugin name, so the folder name becomes the archive's root
    /// prefix.
    #[must_use]
    pub fn staging_dir(&self) -> Utf8PathBuf {
        self.output_dir.join(self.plugin.as_str())
    }

    /// Return the final archive path for the given archive name.
    #[must_use]
    pub fn archive_path(&self, name: &ArchiveName) -> Utf8PathBuf {
        self.output_dir.join(name.filename())
    }
}
