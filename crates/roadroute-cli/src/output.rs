//! Output formatting for route rendering.

use anyhow::Result;
use clap::ValueEnum;
use roadroute_lib::{RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Step-by-step listing.
    #[default]
    Text,
    /// Single line of node identifiers.
    Note,
    /// Pretty-printed JSON summary.
    Json,
}

/// Render a route summary in the requested format.
pub fn render_summary(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => summary.render(RouteRenderMode::PlainText),
        OutputFormat::Note => summary.render(RouteRenderMode::Note),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(summary)?;
            json.push('\n');
            json
        }
    })
}
