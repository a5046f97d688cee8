//! BizAssist application binary - composition root.
//!
//! Ties together the BizAssist crates into a terminal chat session:
//! 1. Load configuration from TOML
//! 2. Open the SQLite conversation store
//! 3. Build the completion delegate for AI assist
//! 4. Run the stdin REPL against the conversation engine

mod cli;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use bizassist_chat::ChatEngine;
use bizassist_core::config::BizConfig;
use bizassist_core::types::{Intent, Language};
use bizassist_llm::client::HttpCompletionClient;
use bizassist_storage::{keys, Database, KvStore};

use crate::cli::CliArgs;
use crate::render::ConsoleSink;

/// Expand ~ to home directory in a path string.
fn resolve_data_dir(data_dir: &str) -> PathBuf {
    if data_dir.starts_with("~/") || data_dir.starts_with("~\\") {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(&data_dir[2..])
    } else {
        PathBuf::from(data_dir)
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /clear        wipe the conversation and start over");
    println!("  /lang en|es   switch language");
    println!("  /ai           toggle AI assist");
    println!("  /key <key>    store the AI assist API key");
    println!("  /quit         exit");
    println!("Quick actions:");
    println!("  /browse /track /agent /ticket /assist /lead /qualify /schedule");
    println!("  /hours /location /contact /pricing /compare /returns /payments");
    println!("  /marketing /finance /hr /startup");
    println!("Anything else is sent to the assistant.");
}

/// Map a slash command onto the same intent surface as a clicked chip.
fn chip_intent(command: &str) -> Option<Intent> {
    let intent = match command {
        "/hours" => Intent::Hours,
        "/location" => Intent::Location,
        "/contact" => Intent::Contact,
        "/pricing" => Intent::Pricing,
        "/compare" => Intent::Compare,
        "/returns" => Intent::Returns,
        "/payments" => Intent::Payments,
        "/ticket" => Intent::Ticket,
        "/track" => Intent::Track,
        "/assist" => Intent::Assist,
        "/lead" => Intent::Lead,
        "/qualify" => Intent::Qualify,
        "/schedule" => Intent::Schedule,
        "/browse" => Intent::Browse,
        "/agent" => Intent::Agent,
        "/marketing" => Intent::Marketing,
        "/finance" => Intent::Finance,
        "/hr" => Intent::Hr,
        "/startup" => Intent::Startup,
        _ => return None,
    };
    Some(intent)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let config = BizConfig::load_or_default(&config_file);

    // Tracing. Priority: --log-level > RUST_LOG > config file value.
    let log_level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting BizAssist v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Storage.
    let data_dir = resolve_data_dir(
        &args
            .resolve_data_dir()
            .unwrap_or_else(|| config.general.data_dir.clone()),
    );
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::error!(path = %data_dir.display(), error = %e, "Failed to create data directory");
        return Err(e.into());
    }
    let db_path = data_dir.join("bizassist.db");
    let db = Database::new(&db_path)?;
    tracing::info!(path = %db_path.display(), "SQLite conversation store opened");

    let kv = KvStore::new(Arc::new(db));

    // Seed the configured default language for a first-ever session.
    if kv.get_raw(keys::LANGUAGE)?.is_none() {
        let lang = Language::from_tag(&config.chat.default_language);
        kv.set_raw(keys::LANGUAGE, lang.tag())?;
    }

    // Completion delegate for AI assist. Always constructed; the engine
    // only consults it when AI assist is enabled and keyed.
    let delegate = Arc::new(HttpCompletionClient::new(&config.llm));

    let mut engine = ChatEngine::new(
        kv,
        Box::new(ConsoleSink),
        Some(delegate),
        config.chat.ai_context_turns,
    )?;
    engine.start()?;

    println!("(type /help for commands)");

    // === REPL ===

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        match trimmed {
            "/quit" | "/exit" => break,
            "/help" => print_help(),
            "/clear" => engine.clear()?,
            "/ai" => {
                engine.toggle_ai()?;
            }
            _ if trimmed.starts_with("/lang") => {
                let tag = trimmed.trim_start_matches("/lang").trim();
                engine.switch_language(Language::from_tag(tag))?;
            }
            _ if trimmed.starts_with("/key") => {
                let mut key = trimmed.trim_start_matches("/key").trim().to_string();
                if key.is_empty() {
                    // Prompt for the credential on its own line.
                    println!("Enter API key:");
                    key = lines.next_line().await?.unwrap_or_default();
                }
                engine.set_api_key(&key)?;
            }
            _ => {
                if let Some(intent) = chip_intent(trimmed) {
                    engine.trigger(intent)?;
                } else {
                    engine.submit(trimmed).await?;
                }
            }
        }
    }

    tracing::info!("Session ended");
    Ok(())
}
