//! Semantic wrapper for plugin names.
//!
//! The plugin name doubles as the staging folder name and the archive
//! filename prefix, so it is passed explicitly rather than as a raw string.

use std::fmt;

/// A semantic plugin name.
///
/// No validation is performed here; the name is whatever the distribution
/// settings declare, spaces and non-ASCII characters included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginName(String);

impl PluginName {
    /// Create a new plugin name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the plugin name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PluginName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PluginName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PluginName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_preserves_spaces_and_unicode() {
        let name = PluginName::from("Lossless Scaling");
        assert_eq!(name.to_string(), "Lossless Scaling");
        assert_eq!(PluginName::from("插件").as_str(), "插件");
    }

    #[test]
    fn into_inner_round_trips() {
        let name = PluginName::new("demo");
        assert_eq!(name.into_inner(), "demo");
    }
}
