//! WikiAgent Server
//!
//! Axum server exposing the Wikipedia question-answering pipeline, plus a
//! one-shot `ask` command for the terminal.

use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use wikiagent_core::config::AgentConfig;
use wikiagent_core::orchestrator::Question;

mod api;

use api::{AppState, SharedState};

#[derive(Parser, Clone)]
#[command(author, version, about = "WikiAgent - Wikipedia-grounded question answering")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the WikiAgent server (default)
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
    /// Answer one question and exit (CLI mode, no server)
    Ask {
        /// The question to answer
        question: String,
    },
}

// === Server Entry ===

pub async fn run_server(config: AgentConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let orchestrator = config.build_orchestrator()?;
    let state: SharedState = Arc::new(AppState {
        orchestrator,
        config,
    });

    let app = api::router(state);

    println!("🚀 WikiAgent Server running at http://{}", addr);
    println!("   API Routes:");
    println!("   Ask:       /api/ask, /api/v1/ask (POST)");
    println!("   Config:    /api/v1/config (GET)");
    println!("   Providers: /api/v1/providers (GET)");
    println!("   Health:    /api/v1/health (GET)");
    println!("   OpenAPI:   /api/v1/openapi.json");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn run_ask(config: AgentConfig, question: &str) -> anyhow::Result<()> {
    let question = Question::new(question)?;
    let orchestrator = config.build_orchestrator()?;

    let outcome = orchestrator.answer_question_traced(&question).await;

    println!("{}", outcome.answer.answer);
    if !outcome.answer.sources.is_empty() {
        println!("\nSources ({}):", outcome.phase.label());
        for (i, source) in outcome.answer.sources.iter().enumerate() {
            println!("  {}. {}", i + 1, source);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = AgentConfig::load().await;

    match args.command {
        Some(CliCommand::Ask { question }) => run_ask(config, &question).await,
        Some(CliCommand::Serve { host, port }) => {
            run_server(config, SocketAddr::new(host, port)).await
        }
        None => {
            let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);
            run_server(config, addr).await
        }
    }
}
