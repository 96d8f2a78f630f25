//! Catalog inspection commands
//!
//! Commands:
//! - `uplink list [--family <name>]` - Commands grouped by family
//! - `uplink show <id>` - One command's schema
//! - `uplink check` - Validate the catalog file

use anyhow::{bail, Result};
use colored::Colorize;

use crate::catalog::{CommandRole, CommandSpec, ParameterKind};
use crate::commands::common::{CatalogArgs, Workspace};

/// List commands grouped by family, alphabetically
pub fn list(args: &CatalogArgs, family: Option<String>) -> Result<()> {
    let ws = Workspace::open(args)?;
    let mut shown = 0;

    for (name, specs) in ws.catalog.families() {
        if let Some(filter) = &family {
            if !name.eq_ignore_ascii_case(filter) {
                continue;
            }
        }

        let heading = if name.is_empty() { "(no family)" } else { name };
        println!("{}", heading.bold());
        for spec in specs {
            println!("  {:<16} {}{}", spec.id.cyan(), spec.name, role_marker(spec));
            shown += 1;
        }
    }

    // validation rejects empty catalogs, so only a family filter can match nothing
    if let (0, Some(f)) = (shown, family) {
        bail!("No commands in family '{f}'");
    }

    Ok(())
}

/// Show the full schema of one command
pub fn show(args: &CatalogArgs, id: &str) -> Result<()> {
    let ws = Workspace::open(args)?;
    let spec = ws.catalog.lookup(id)?;

    println!("{} {}", spec.id.cyan().bold(), spec.name.bold());
    println!("  {:<10} {}", "family".dimmed(), spec.family);
    match &spec.role {
        CommandRole::Standalone { int_token } => {
            println!("  {:<10} {}", "wire".dimmed(), int_token);
        }
        CommandRole::ArgumentBlock => {
            println!(
                "  {:<10} argument block (opens a new wire string)",
                "wire".dimmed()
            );
        }
    }
    if let Some(example) = &spec.example {
        println!("  {:<10} {}", "example".dimmed(), example);
    }

    if spec.parameters.is_empty() {
        println!("\n  {}", "No parameters".dimmed());
        return Ok(());
    }

    println!("\n{}", "Parameters".bold());
    for (i, param) in spec.parameters.iter().enumerate() {
        let kind = match param.kind {
            ParameterKind::Text => "text",
            ParameterKind::Number => "number",
            ParameterKind::Boolean => "boolean",
            ParameterKind::Dropdown => "dropdown",
            ParameterKind::Other => "other",
        };
        let enclosure = param
            .effective_enclosure()
            .map(|e| format!(" enclosed by {e}"))
            .unwrap_or_default();

        println!(
            "  {}. {} ({kind}{enclosure})",
            i + 1,
            param.name.cyan()
        );
        if !param.description.is_empty() {
            println!("     {}", param.description.dimmed());
        }
        for option in &param.options {
            println!("     {:<12} {}", option.value.green(), option.label);
        }
    }

    Ok(())
}

/// Validate the catalog and report a summary
pub fn check(args: &CatalogArgs) -> Result<()> {
    let ws = Workspace::open(args)?;

    let blocks = ws.catalog.iter().filter(|s| s.is_argument_block()).count();
    let families = ws.catalog.families().len();
    println!(
        "{} {} is valid: {} command(s), {} argument block(s), {} famil{}",
        "✓".green().bold(),
        ws.catalog_path.display(),
        ws.catalog.len(),
        blocks,
        families,
        if families == 1 { "y" } else { "ies" }
    );

    Ok(())
}

fn role_marker(spec: &CommandSpec) -> String {
    if spec.is_argument_block() {
        format!(" {}", "[block]".yellow())
    } else {
        String::new()
    }
}
