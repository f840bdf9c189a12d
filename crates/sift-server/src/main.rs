//! Sift — LLM knowledge extraction server.

use std::sync::Arc;

use sift_core::SiftConfig;
use sift_llm::LlmMetadataExtractor;
use sift_nlp::{extract_keywords, DEFAULT_TOP_N};
use sift_server::{build_router, eval, AppState};
use sift_store::SqliteStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Sift — LLM knowledge extraction server");
    println!();
    println!("Usage: sift [command]");
    println!();
    println!("Commands:");
    println!("  (none) | serve            Start the server");
    println!("  keywords <text> [top_n]   Print keywords for text (no LLM call)");
    println!("  eval [base-url]           Run the quality evaluation against a running server");
    println!("  help                      Show this help message");
    println!();
    println!("Configuration is read from the environment: PORT, HOST, DATABASE_URL,");
    println!("LLM_PROVIDER, LLM_MODEL, LLM_API_KEY (or OPENAI_API_KEY / GROQ_API_KEY /");
    println!("ANTHROPIC_API_KEY), LLM_BASE_URL, LLM_TEMPERATURE, LLM_MAX_TOKENS,");
    println!("LLM_TIMEOUT_SECS, RUST_LOG.");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "serve" => {}
            "keywords" => {
                if args.len() < 3 {
                    eprintln!("Usage: sift keywords <text> [top_n]");
                    std::process::exit(1);
                }
                let top_n = match args.get(3) {
                    Some(n) => n
                        .parse()
                        .map_err(|_| anyhow::anyhow!("top_n must be a non-negative integer: {}", n))?,
                    None => DEFAULT_TOP_N,
                };
                for keyword in extract_keywords(&args[2], top_n) {
                    println!("{}", keyword);
                }
                return Ok(());
            }
            "eval" => {
                let base_url = args.get(2).map(String::as_str).unwrap_or(eval::DEFAULT_BASE_URL);
                match eval::run(base_url, eval::CASES).await {
                    Ok(report) => {
                        eval::print_report(&report, eval::CASES);
                        return Ok(());
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        eprintln!("Start the server with: sift serve");
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'sift help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let config = SiftConfig::from_env()?;

    let store = SqliteStore::from_location(&config.database)
        .map_err(|e| anyhow::anyhow!("Failed to open store: {}", e))?;

    let extractor = LlmMetadataExtractor::new(&config.llm)
        .map_err(|e| anyhow::anyhow!("Failed to initialize extractor: {}", e))?;

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState::new(config, store, Arc::new(extractor)));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Sift server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
