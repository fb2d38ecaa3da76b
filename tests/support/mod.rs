//! Test support utilities for packager behaviour tests.
//!
//! Provides builders for realistic plugin source trees inside temporary
//! directories, plus helpers for inspecting produced archives.

use camino::{Utf8Path, Utf8PathBuf};
use decky_packager::layout::PackageLayout;
use decky_packager::plugin_name::PluginName;
use std::fs;
use tempfile::TempDir;

/// A plugin source tree rooted in a temporary directory.
///
/// The temporary directory is kept alive for the lifetime of the value.
pub struct PluginTree {
    _temp_dir: TempDir,
    root: Utf8PathBuf,
}

impl PluginTree {
    /// Return the plugin root directory.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Remove a file or directory from the tree.
    pub fn remove(&self, name: &str) {
        let path = self.root.join(name);
        if path.is_dir() {
            fs::remove_dir_all(&path).expect("remove directory");
        } else {
            fs::remove_file(&path).expect("remove file");
        }
    }
}

/// Build a complete plugin tree whose `package.json` holds `manifest_json`.
///
/// The tree carries the full required file list, a nested `dist` build
/// output, and both optional directories.
pub fn plugin_tree(manifest_json: &str) -> PluginTree {
    let temp_dir = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).expect("utf8 temp dir");

    fs::write(root.join("package.json"), manifest_json).expect("write package.json");
    fs::write(root.join("plugin.json"), r#"{"name": "demo"}"#).expect("write plugin.json");
    fs::write(root.join("LICENSE"), "ISC").expect("write LICENSE");
    fs::write(root.join("main.py"), "class Plugin: ...\n").expect("write main.py");
    fs::write(root.join("README.md"), "# demo\n").expect("write README.md");
    fs::write(root.join("defaults.txt"), "defaults\n").expect("write defaults.txt");
    fs::write(root.join("shared_config.py"), "CONFIG = {}\n").expect("write shared_config.py");

    fs::create_dir_all(root.join("dist").join("assets")).expect("mkdir dist");
    fs::write(root.join("dist").join("index.js"), "export {};\n").expect("write index.js");
    fs::write(root.join("dist").join("assets").join("style.css"), "body {}\n")
        .expect("write style.css");

    fs::create_dir_all(root.join("bin")).expect("mkdir bin");
    fs::write(root.join("bin").join("backend"), b"\x7fELF").expect("write backend");

    fs::create_dir_all(root.join("py_modules")).expect("mkdir py_modules");
    fs::write(root.join("py_modules").join("helper.py"), "def helper(): ...\n")
        .expect("write helper.py");

    PluginTree {
        _temp_dir: temp_dir,
        root,
    }
}

/// Build the default-output layout for a tree, with plugin name `name`.
pub fn layout_for(tree: &PluginTree, name: &str) -> PackageLayout {
    PackageLayout::with_default_output(tree.root().to_owned(), PluginName::from(name))
}

/// List the entry names of a zip archive, in stored order.
pub fn archive_entries(path: &Utf8Path) -> Vec<String> {
    let file = fs::File::open(path).expect("open archive");
    let archive = zip::ZipArchive::new(file).expect("read archive");
    archive.file_names().map(str::to_owned).collect()
}

/// List the zip archives present in a directory.
pub fn zip_files_in(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let mut found = Vec::new();
    for entry in dir.read_dir_utf8().expect("read output dir") {
        let entry = entry.expect("dir entry");
        if entry.path().extension() == Some("zip") {
            found.push(entry.path().to_owned());
        }
    }
    found.sort();
    found
}
