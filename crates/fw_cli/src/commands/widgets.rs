//! Widgets command - List the descriptor catalog.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use fw_renderers::{collect_descriptors, load_builtin_templates};

#[derive(Args)]
pub struct WidgetsArgs {
    /// Templates directory
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Emit the catalog as JSON
    #[arg(long)]
    json: bool,
}

pub async fn execute(args: WidgetsArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let templates_path = args
        .templates_dir
        .unwrap_or_else(|| current_dir.join("templates"));

    let store = load_builtin_templates(&templates_path)
        .await
        .context("Failed to load builtin templates")?;

    let descriptors = collect_descriptors(Vec::new(), &store);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    println!("{:<14} {:<16} DESCRIPTION", "WIDGET", "NAME");
    for descriptor in &descriptors {
        println!(
            "{:<14} {:<16} {}",
            descriptor.widget, descriptor.name, descriptor.description
        );
    }

    Ok(())
}
