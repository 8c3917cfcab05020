//! Smoke command - Verify the template directory covers the builtin set.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;
use walkdir::WalkDir;

use fw_renderers::BUILTIN_TEMPLATES;

#[derive(Args)]
pub struct SmokeArgs {
    /// Templates directory
    #[arg(long)]
    templates_dir: Option<PathBuf>,
}

pub async fn execute(args: SmokeArgs) -> Result<()> {
    info!("Running template smoke check");

    let current_dir = std::env::current_dir()?;
    let templates_path = args
        .templates_dir
        .unwrap_or_else(|| current_dir.join("templates"));

    if !templates_path.exists() {
        anyhow::bail!("Templates directory not found: {:?}", templates_path);
    }

    // Every .tpl actually present, as store identifiers.
    let present: HashSet<String> = WalkDir::new(&templates_path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tpl"))
        .filter_map(|e| {
            e.path()
                .strip_prefix(&templates_path)
                .ok()
                .map(|rel| rel.to_string_lossy().replace('\\', "/"))
        })
        .collect();

    println!("Checking {} builtin template(s)...\n", BUILTIN_TEMPLATES.len());

    let mut passed = 0;
    let mut failed = 0;

    for id in BUILTIN_TEMPLATES {
        if present.contains(id) {
            println!("{id}... ok");
            passed += 1;
        } else {
            println!("{id}... MISSING");
            failed += 1;
        }
    }

    for extra in present.iter().filter(|id| !BUILTIN_TEMPLATES.contains(&id.as_str())) {
        println!("note: {extra} is not part of the builtin set");
    }

    println!();
    println!("Results: {} passed, {} failed", passed, failed);

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
