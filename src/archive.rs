//! Archive writing for plugin distribution.
//!
//! Walks the staging tree and writes every file into a deflate-compressed
//! zip archive. Entry names are made relative to the output directory, so
//! the staging folder name (the plugin name) is the archive's root prefix.
//! Entries are written in sorted path order, which keeps archives built
//! from identical inputs byte-for-byte comparable across filesystems.

use crate::error::{PackagerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io::Read;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Create the distribution archive at `archive_path`.
///
/// Any pre-existing archive of the same name is deleted first. Every file
/// under `staging_dir` is written with its path relative to `base_dir`.
///
/// # Errors
///
/// Propagates filesystem errors from the walk and [`PackagerError::Archive`]
/// from the zip writer.
pub fn create_archive(
    staging_dir: &Utf8Path,
    base_dir: &Utf8Path,
    archive_path: &Utf8Path,
) -> Result<()> {
    if archive_path.is_file() {
        fs::remove_file(archive_path)?;
    }

    let entries = collect_entries(staging_dir)?;
    log::debug!("writing {} entries to {archive_path}", entries.len());

    let file = fs::File::create(archive_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in &entries {
        let name = entry_name(path, base_dir)?;
        log::trace!("adding {name}");
        writer.start_file(name, options)?;
        let mut source = fs::File::open(path)?;
        std::io::copy(&mut source, &mut writer)?;
    }

    writer.finish()?;
    Ok(())
}

/// Collect every file under `dir`, sorted by path.
fn collect_entries(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    walk_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

/// Recursively gather file paths under `dir`.
fn walk_files(dir: &Utf8Path, files: &mut Vec<Utf8PathBuf>) -> Result<()> {
    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            walk_files(entry.path(), files)?;
        } else {
            files.push(entry.path().to_owned());
        }
    }
    Ok(())
}

/// Compute the archive entry name for `path`: its path relative to
/// `base_dir`, with `/` separators regardless of platform.
fn entry_name(path: &Utf8Path, base_dir: &Utf8Path) -> Result<String> {
    let relative =
        path.strip_prefix(base_dir)
            .map_err(|_| PackagerError::EntryEscapesOutput {
                path: path.to_owned(),
            })?;
    let components: Vec<&str> = relative.components().map(|c| c.as_str()).collect();
    Ok(components.join("/"))
}

/// A lowercase hex SHA-256 digest of a finished archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveDigest(String);

impl ArchiveDigest {
    /// Return the digest as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArchiveDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the SHA-256 digest of the file at `path`.
///
/// Reads the file in chunks and returns the lowercase hex digest.
///
/// # Errors
///
/// Returns [`PackagerError::Io`] if the file cannot be read.
pub fn compute_sha256(path: &Utf8Path) -> Result<ArchiveDigest> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(ArchiveDigest(format!("{:x}", hasher.finalize())))
}
