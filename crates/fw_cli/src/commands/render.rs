//! Render command - Dispatch one widget instance against offline services.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use fw_core::{Dispatcher, WidgetInstance, WidgetRegistry};
use fw_renderers::{load_builtin_templates, register_builtins};
use fw_services::CallLimits;

use crate::offline;

#[derive(Args)]
pub struct RenderArgs {
    /// YAML file describing the widget instance to render
    #[arg(short, long)]
    widget: PathBuf,

    /// Templates directory
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Per-call timeout for service lookups, in seconds
    #[arg(long, env = "FW_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
}

pub async fn execute(args: RenderArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let templates_path = args
        .templates_dir
        .unwrap_or_else(|| current_dir.join("templates"));

    let store = Arc::new(
        load_builtin_templates(&templates_path)
            .await
            .context("Failed to load builtin templates")?,
    );

    let limits = CallLimits::with_timeout(Duration::from_secs(args.timeout_secs));
    let services = offline::services(limits);

    let mut registry = WidgetRegistry::new();
    register_builtins(&mut registry, store, &services);
    let dispatcher = Dispatcher::new(Arc::new(registry));

    let raw = std::fs::read_to_string(&args.widget)
        .with_context(|| format!("Failed to read widget file {:?}", args.widget))?;
    let instance: WidgetInstance =
        serde_yaml::from_str(&raw).context("Invalid widget instance file")?;

    info!("Rendering widget '{}'", instance.widget_type);
    let markup = dispatcher.render(&instance.widget_type, &instance).await?;

    println!("{markup}");
    Ok(())
}
