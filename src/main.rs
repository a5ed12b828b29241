//! Bot Interaction Test - Main Entry Point
//!
//! Sends a test notification to the admin chat and reports the
//! Autonomous Finder automation settings.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use finder_bot_check::check::InteractionCheck;
use finder_bot_check::config::{
    AutomationConfig, CheckSettings, NotificationConfigSnapshot, TelegramConfig,
};
use finder_bot_check::monitoring::FileConfigSource;
use finder_bot_check::telegram::TelegramBot;

/// Sends a test message through the bot and prints the automation config.
#[derive(Parser, Debug)]
#[command(name = "test_bot_interaction")]
#[command(about = "Check that the Autonomous Finder bot can reach its admin")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Path to the automation JSON configuration file.
    #[arg(short, long)]
    automation_config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Generate an example automation configuration file and exit.
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    // Handle example config generation
    if args.generate_config {
        return match generate_example_config() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("❌ {:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    // Load environment variables
    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    // Nothing touches the network until both credentials are present
    let tg_config = match TelegramConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Missing credentials: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut settings = CheckSettings::from_env_with_defaults();
    if let Some(path) = args.automation_config {
        settings.automation_config_path = path;
    }

    match run_check(&tg_config, &settings).await {
        Ok(_) => {
            info!("🏁 Bot interaction test completed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ Test failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the bot client and runs the interaction check.
async fn run_check(
    config: &TelegramConfig,
    settings: &CheckSettings,
) -> Result<NotificationConfigSnapshot> {
    let bot = TelegramBot::new(config, &settings.api_base_url)
        .context("Failed to create Telegram client")?;

    let source = FileConfigSource::new(&settings.automation_config_path);

    let check = InteractionCheck::new(Arc::new(bot), Arc::new(source), config.admin_chat.clone());

    Ok(check.run().await?)
}

/// Generates an example configuration file.
fn generate_example_config() -> Result<()> {
    let example = AutomationConfig::example();
    example
        .save_to_file("automation.example.json")
        .context("Failed to write automation.example.json")?;

    println!("✓ Example configuration written to: automation.example.json");
    println!("\nTo run the check:");
    println!("1. Copy automation.example.json to automation.json");
    println!("2. Create a .env file with TELEGRAM_BOT_TOKEN and ADMIN_TELEGRAM_USER_ID");
    println!("3. Run: test_bot_interaction");

    Ok(())
}
