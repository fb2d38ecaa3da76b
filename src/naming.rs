//! Archive naming policy for plugin distribution archives.
//!
//! Constructs deterministic archive names in the format
//! `<plugin-name>-<version>-<suffix>.zip`.

use crate::manifest::PluginVersion;
use crate::plugin_name::PluginName;
use std::fmt;

/// The fixed file extension for distribution archives.
pub const ARCHIVE_EXTENSION: &str = ".zip";

/// Default plugin name from the distribution settings.
pub const DEFAULT_PLUGIN_NAME: &str = "Lossless Scaling";

/// Default archive filename suffix from the distribution settings.
pub const DEFAULT_ARCHIVE_SUFFIX: &str = "中文版";

/// A fully-qualified distribution archive name.
///
/// # Examples
///
/// ```
/// use decky_packager::manifest::PluginVersion;
/// use decky_packager::naming::ArchiveName;
/// use decky_packager::plugin_name::PluginName;
///
/// let name = ArchiveName::new(
///     PluginName::from("Lossless Scaling"),
///     PluginVersion::new("1.2.3"),
///     "中文版",
/// );
/// assert_eq!(name.to_string(), "Lossless Scaling-1.2.3-中文版.zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    plugin: PluginName,
    version: PluginVersion,
    suffix: String,
}

impl ArchiveName {
    /// Create an archive name from its components.
    #[must_use]
    pub fn new(plugin: PluginName, version: PluginVersion, suffix: impl Into<String>) -> Self {
        Self {
            plugin,
            version,
            suffix: suffix.into(),
        }
    }

    /// Return the plugin name component.
    #[must_use]
    pub fn plugin(&self) -> &PluginName {
        &self.plugin
    }

    /// Return the version component.
    #[must_use]
    pub fn version(&self) -> &PluginVersion {
        &self.version
    }

    /// Return the suffix component.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Return the filename as a string without consuming the value.
    #[must_use]
    pub fn filename(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}{ARCHIVE_EXTENSION}",
            self.plugin, self.version, self.suffix
        )
    }
}
