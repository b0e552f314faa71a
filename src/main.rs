// panel-scan: submit a text to the analysis service and print the ranked
// per-model risk panel

use anyhow::{Context, Result};
use clap::Parser;
use panelscope::init_logging;
use panelscope::services::{
    display_entries, render_error, render_report, render_unified_summary, PanelClient, PanelError,
    RequestLifecycle, RequestState,
};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "panel-scan", about = "Multi-model AI text risk panel client")]
struct Cli {
    /// Text to analyze (reads stdin when neither this nor --file is given)
    text: Option<String>,

    /// Read the text to analyze from a file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Analysis service endpoint (overrides PANEL_API_URL)
    #[arg(long)]
    url: Option<String>,

    /// Route requests through an HTTP proxy
    #[arg(long, conflicts_with = "url")]
    proxy: Option<String>,

    /// Print the raw result JSON instead of the rendered report
    #[arg(long)]
    json: bool,
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

fn build_client(cli: &Cli) -> Result<PanelClient> {
    if let Some(proxy) = &cli.proxy {
        return PanelClient::with_proxy(proxy).context("invalid proxy URL");
    }
    if let Some(url) = &cli.url {
        return Ok(PanelClient::with_url(url));
    }
    Ok(PanelClient::new())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_logging();

    let cli = Cli::parse();
    let text = read_input(&cli)?;

    let mut lifecycle = RequestLifecycle::new();
    if !lifecycle.submit(&text) {
        warn!("nothing to analyze: input is blank");
        return Ok(ExitCode::SUCCESS);
    }

    let client = build_client(&cli)?;
    info!("analyzing {} chars via {}", text.len(), client.analyze_url());

    match client.analyze(&text).await {
        Ok(result) => lifecycle.resolve_ok(result),
        Err(PanelError::Api { message, .. }) => lifecycle.resolve_err(message),
        Err(e) => lifecycle.resolve_err(e.to_string()),
    }

    match lifecycle.state() {
        RequestState::Success(result) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(result)?);
                return Ok(ExitCode::SUCCESS);
            }
            if let Some(summary) = render_unified_summary(result) {
                print!("{}", summary);
            }
            print!("{}", render_report(&display_entries(result)));
            Ok(ExitCode::SUCCESS)
        }
        RequestState::Error(message) => {
            print!("{}", render_error(message));
            Ok(ExitCode::FAILURE)
        }
        // submit() accepted, so the request resolved one way or the other.
        RequestState::Idle | RequestState::Loading => Ok(ExitCode::SUCCESS),
    }
}
