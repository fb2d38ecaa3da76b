//! CLI argument definitions for the plugin packager.
//!
//! This module defines the command-line interface using clap. It is
//! separated from the main entrypoint to keep the binary small and focused
//! on orchestration. Every flag has a fixed default, so the flagless
//! invocation reproduces the canonical packaging behaviour.

use crate::naming::{DEFAULT_ARCHIVE_SUFFIX, DEFAULT_PLUGIN_NAME};
use camino::Utf8PathBuf;
use clap::Parser;

/// Package a Decky Loader plugin into a versioned distribution archive.
#[derive(Parser, Debug)]
#[command(name = "decky-packager")]
#[command(version, about)]
#[command(long_about = concat!(
    "Package a Decky Loader plugin into a versioned distribution archive.\n\n",
    "The packager reads the plugin version from package.json, assembles a ",
    "staging folder containing the frontend build output (dist), the optional ",
    "bin and py_modules directories, and the plugin's required files, then ",
    "compresses the folder into <name>-<version>-<suffix>.zip inside the ",
    "output directory. The staging folder is removed when the run ends.\n\n",
    "The dist directory is mandatory; everything else is copied only if ",
    "present.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Package the plugin in the current directory:\n",
    "    $ decky-packager\n\n",
    "  Package a plugin checked out elsewhere:\n",
    "    $ decky-packager --root ~/src/my-plugin\n\n",
    "  Preview the resolved configuration without packaging:\n",
    "    $ decky-packager --dry-run\n",
))]
pub struct Cli {
    /// Plugin root directory [default: current directory].
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<Utf8PathBuf>,

    /// Output directory for the archive [default: <root>/buildOutput].
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Plugin name used for the staging folder and archive filename.
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_PLUGIN_NAME)]
    pub name: String,

    /// Suffix embedded in the archive filename.
    #[arg(short, long, value_name = "SUFFIX", default_value = DEFAULT_ARCHIVE_SUFFIX)]
    pub suffix: String,

    /// Show the resolved configuration and exit without packaging.
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for Cli {
    /// Creates a `Cli` instance matching the flagless invocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use decky_packager::cli::Cli;
    ///
    /// let cli = Cli::default();
    /// assert!(cli.root.is_none());
    /// assert!(!cli.dry_run);
    /// ```
    fn default() -> Self {
        Self {
            root: None,
            output_dir: None,
            name: DEFAULT_PLUGIN_NAME.to_owned(),
            suffix: DEFAULT_ARCHIVE_SUFFIX.to_owned(),
            dry_run: false,
            quiet: false,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
