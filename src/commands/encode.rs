//! `uplink encode <batch>` - fold a staged batch into wire strings
//!
//! Wire strings are written one per line, to `--output`, the config's `output`,
//! or stdout. Warnings go to stderr so stdout can be piped straight to an uplink.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::commands::common::{print_warnings, CatalogArgs, Workspace};
use crate::staging::StagedBatch;

pub struct EncodeOptions {
    pub batch: PathBuf,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub strict: bool,
}

pub fn execute(args: &CatalogArgs, options: EncodeOptions) -> Result<()> {
    let ws = Workspace::open(args)?;
    let batch = StagedBatch::read(&options.batch)?;

    if batch.is_empty() {
        bail!("Staged batch '{}' has no commands", options.batch.display());
    }

    let output = batch.encode(&ws.catalog);
    print_warnings(&output.warnings);

    if options.strict && !output.warnings.is_empty() {
        bail!(
            "{} warning(s) in strict mode, nothing written",
            output.warnings.len()
        );
    }

    let destination = if options.stdout {
        None
    } else {
        options.output.or_else(|| ws.config.output.clone())
    };

    match destination {
        Some(path) => {
            write_wire_file(&path, &output.wire)?;
            println!(
                "{} Wrote {} wire string(s) from {} command(s) to {}",
                "✓".green().bold(),
                output.wire.len(),
                batch.len(),
                path.display().to_string().cyan()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            for wire in &output.wire {
                writeln!(handle, "{wire}").context("Failed to write to stdout")?;
            }
        }
    }

    Ok(())
}

/// Write wire strings one per line, creating parent directories
pub fn write_wire_file(path: &Path, wire: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut content = wire.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write wire file: {}", path.display()))
}
