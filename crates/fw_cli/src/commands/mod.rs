//! CLI command definitions.
//!
//! Each subcommand exercises one surface of the widget subsystem: the
//! descriptor catalog, a single dispatch against offline services, or the
//! template directory check.

use clap::{Parser, Subcommand};

pub mod render;
pub mod smoke;
pub mod widgets;

/// ForumWidgets - widget rendering preview and diagnostics
#[derive(Parser)]
#[command(name = "fw")]
#[command(version, about = "ForumWidgets - widget rendering preview and diagnostics")]
#[command(long_about = r#"
ForumWidgets renders configured widget instances into markup fragments.
This CLI previews renders against deterministic offline services and checks
the builtin template set.

COMMANDS:
  widgets → List the widget descriptor catalog
  render  → Render one widget instance from a YAML file
  smoke   → Verify the template directory covers the builtin set

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or unknown widget type
  3 - Render failure (upstream service error or timeout)
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the widget descriptor catalog
    Widgets(widgets::WidgetsArgs),

    /// Render one widget instance from a YAML file
    Render(render::RenderArgs),

    /// Verify the template directory covers the builtin set
    Smoke(smoke::SmokeArgs),
}
