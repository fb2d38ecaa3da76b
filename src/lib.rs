//! Plugin distribution packaging library.
//!
//! This crate assembles a Decky Loader plugin's distribution folder and
//! compresses it into a versioned zip archive. It is used by the
//! `decky-packager` CLI binary and can be consumed programmatically for
//! testing or custom release workflows.
//!
//! # Modules
//!
//! - [`archive`] - Zip writing and archive digests
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Semantic error types
//! - [`layout`] - Filesystem layout and the fixed file lists
//! - [`manifest`] - Plugin manifest loading and version fallback
//! - [`naming`] - Deterministic archive naming
//! - [`output`] - Progress, completion, and dry-run formatting
//! - [`pipeline`] - Packaging run orchestration
//! - [`plugin_name`] - Semantic wrapper for plugin names
//! - [`stager`] - Staging directory assembly with guaranteed cleanup

pub mod archive;
pub mod cli;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod plugin_name;
pub mod stager;
