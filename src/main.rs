use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meeting_insights::analysis::DEFAULT_DIAGRAM_TYPE;
use meeting_insights::config::DEFAULT_CONFIG_PATH;
use meeting_insights::{create_router, AppState, Config, GatewayClient};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "meeting-insights", version, about = "Meeting transcript summaries and diagrams")]
struct Cli {
    /// Config file (any format supported by the `config` crate)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve {
        /// Override service.http.bind
        #[arg(long)]
        bind: Option<String>,

        /// Override service.http.port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Analyze one transcript and print the result as JSON
    Analyze {
        /// Diagram style hint (flowchart, blueprint, mermaid, ...)
        #[arg(long, default_value = DEFAULT_DIAGRAM_TYPE)]
        diagram_type: String,

        /// Transcript file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    // Fail fast: no credential, no server
    let gateway = GatewayClient::new(cfg.gateway_settings()?)
        .context("Failed to create LLM gateway client")?;
    let state =
        AppState::new(Arc::new(gateway)).with_max_body_bytes(cfg.service.http.max_body_bytes);

    match cli.command.unwrap_or(Command::Serve {
        bind: None,
        port: None,
    }) {
        Command::Serve { bind, port } => {
            let bind = bind.unwrap_or(cfg.service.http.bind);
            let port = port.unwrap_or(cfg.service.http.port);
            serve(&cfg.service.name, state, &bind, port).await
        }
        Command::Analyze { diagram_type, file } => {
            let transcript = read_transcript(file)?;
            let result = state.analyzer.analyze(&transcript, &diagram_type).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}

async fn serve(name: &str, state: AppState, bind: &str, port: u16) -> Result<()> {
    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("{} v{}", name, env!("CARGO_PKG_VERSION"));
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router(state))
        .await
        .context("HTTP server failed")?;

    Ok(())
}

fn read_transcript(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read transcript {}", path.display())),
        None => {
            let mut transcript = String::new();
            std::io::stdin()
                .read_to_string(&mut transcript)
                .context("Failed to read transcript from stdin")?;
            Ok(transcript)
        }
    }
}
