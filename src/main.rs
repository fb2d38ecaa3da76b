//! Plugin packager CLI entrypoint.
//!
//! This binary stages a plugin's distribution files and compresses them
//! into a versioned archive. Progress goes to stderr; the completion
//! message with the archive path is printed to stdout on success.

use camino::Utf8PathBuf;
use clap::Parser;
use decky_packager::cli::Cli;
use decky_packager::error::{PackagerError, Result};
use decky_packager::layout::PackageLayout;
use decky_packager::manifest::load_manifest;
use decky_packager::naming::ArchiveName;
use decky_packager::output::{DryRunInfo, success_message, write_stderr_line};
use decky_packager::pipeline::{PipelineContext, package_plugin};
use decky_packager::plugin_name::PluginName;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<()> {
    let layout = resolve_layout(cli)?;

    if cli.dry_run {
        return run_dry(cli, &layout, stderr);
    }

    let context = PipelineContext {
        layout: &layout,
        suffix: &cli.suffix,
        quiet: cli.quiet,
    };
    let output = package_plugin(&context, stderr)?;
    println!("{}", success_message(&output.archive_path, &output.digest));
    Ok(())
}

/// Runs in dry-run mode, showing the resolved configuration without side
/// effects. The manifest is still read so the report can show the version
/// and archive name the real run would use.
fn run_dry(cli: &Cli, layout: &PackageLayout, stderr: &mut dyn Write) -> Result<()> {
    let manifest = load_manifest(&layout.manifest_path())?;
    let version = manifest.version();
    let archive = ArchiveName::new(layout.plugin().clone(), version.clone(), &cli.suffix);

    let info = DryRunInfo {
        root: layout.root(),
        output_dir: layout.output_dir(),
        plugin: layout.plugin().as_str(),
        version: version.as_str(),
        archive: &archive.filename(),
    };
    write_stderr_line(stderr, info.display_text());
    Ok(())
}

/// Resolves the run layout from the CLI flags and the current directory.
fn resolve_layout(cli: &Cli) -> Result<PackageLayout> {
    let root = match &cli.root {
        Some(dir) => dir.clone(),
        None => current_dir_utf8()?,
    };
    let plugin = PluginName::from(cli.name.as_str());
    Ok(match &cli.output_dir {
        Some(dir) => PackageLayout::new(root, dir.clone(), plugin),
        None => PackageLayout::with_default_output(root, plugin),
    })
}

fn current_dir_utf8() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::try_from(cwd).map_err(|e| PackagerError::NonUtf8Path {
        path: e.into_path_buf(),
    })
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}
