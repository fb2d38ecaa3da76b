//! Plugin manifest loading.
//!
//! The manifest is the `package.json` at the plugin root. It is read once
//! at startup and only the `version` field is consulted; a manifest
//! without one yields the [`FALLBACK_VERSION`] token rather than an error.

use crate::error::{PackagerError, Result};
use camino::Utf8Path;
use serde::Deserialize;
use std::fmt;
use std::fs;

/// Version token used when the manifest declares no version.
pub const FALLBACK_VERSION: &str = "no-version";

/// The subset of the plugin manifest the packager consumes.
///
/// Unknown keys are ignored; `package.json` carries plenty of fields that
/// are irrelevant to packaging.
///
/// # Examples
///
/// ```
/// use decky_packager::manifest::PluginManifest;
///
/// let manifest: PluginManifest =
///     serde_json::from_str(r#"{"version": "1.2.3"}"#).expect("valid manifest");
/// assert_eq!(manifest.version().as_str(), "1.2.3");
///
/// let bare: PluginManifest = serde_json::from_str("{}").expect("valid manifest");
/// assert_eq!(bare.version().as_str(), "no-version");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginManifest {
    #[serde(default)]
    version: Option<String>,
}

impl PluginManifest {
    /// Return the declared version, or the fallback token if absent.
    #[must_use]
    pub fn version(&self) -> PluginVersion {
        PluginVersion::new(self.version.as_deref().unwrap_or(FALLBACK_VERSION))
    }
}

/// A plugin version string as resolved from the manifest.
///
/// Stored as an opaque string; the packager never interprets version
/// syntax, it only embeds the value in the archive filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginVersion(String);

impl PluginVersion {
    /// Create a new version wrapper.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read and parse the plugin manifest at `path`.
///
/// # Errors
///
/// Returns [`PackagerError::ManifestRead`] if the file cannot be read and
/// [`PackagerError::ManifestParse`] if it is not valid JSON.
pub fn load_manifest(path: &Utf8Path) -> Result<PluginManifest> {
    let contents = fs::read_to_string(path).map_err(|source| PackagerError::ManifestRead {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| PackagerError::ManifestParse {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::declared(r#"{"version": "1.2.3"}"#, "1.2.3")]
    #[case::missing_key("{}", FALLBACK_VERSION)]
    #[case::null_version(r#"{"version": null}"#, FALLBACK_VERSION)]
    #[case::other_keys_ignored(r#"{"name": "demo", "version": "0.9.0"}"#, "0.9.0")]
    fn version_resolution(#[case] json: &str, #[case] expected: &str) {
        let manifest: PluginManifest = serde_json::from_str(json).expect("valid manifest");
        assert_eq!(manifest.version().as_str(), expected);
    }

    #[test]
    fn load_manifest_reads_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{"version": "2.0.1"}"#).expect("write manifest");
        let utf8 = camino::Utf8PathBuf::try_from(path).expect("utf8 path");

        let manifest = load_manifest(&utf8).expect("manifest loads");
        assert_eq!(manifest.version().as_str(), "2.0.1");
    }

    #[test]
    fn load_manifest_reports_missing_file() {
        let err = load_manifest(Utf8Path::new("/nonexistent/package.json"))
            .expect_err("missing manifest must fail");
        assert!(matches!(err, PackagerError::ManifestRead { .. }));
    }

    #[test]
    fn load_manifest_reports_malformed_json() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("package.json");
        std::fs::write(&path, "{not json").expect("write manifest");
        let utf8 = camino::Utf8PathBuf::try_from(path).expect("utf8 path");

        let err = load_manifest(&utf8).expect_err("malformed manifest must fail");
        assert!(matches!(err, PackagerError::ManifestParse { .. }));
    }
}
