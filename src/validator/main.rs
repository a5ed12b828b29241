//! Standalone validator for automation configuration files.
//!
//! Checks the Autonomous Finder settings the monitoring manager reads:
//! the check interval and every watched channel URL.

use std::process::ExitCode;

use clap::Parser;

use finder_bot_check::config::{AutomationConfig, DEFAULT_CHECK_INTERVAL_MINUTES};

/// Automation configuration validator.
#[derive(Parser, Debug)]
#[command(name = "validate_automation")]
#[command(about = "Validates automation configuration files for the Autonomous Finder bot")]
#[command(version)]
struct Args {
    /// Path to the JSON configuration file to validate.
    #[arg(short, long, default_value = "automation.json")]
    file: String,

    /// Generate an example configuration file at the specified path.
    #[arg(long)]
    generate_example: Option<String>,

    /// Show detailed information for each channel.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(output_path) = args.generate_example {
        return generate_example(&output_path);
    }

    validate_config(&args.file, args.verbose)
}

fn generate_example(output_path: &str) -> ExitCode {
    let example = AutomationConfig::example();

    match example.save_to_file(output_path) {
        Ok(()) => {
            println!("✓ Example configuration written to: {output_path}");
            println!(
                "\nThe file watches {} example channels.",
                example.channel_count()
            );
            println!("Replace the channel URLs with the channels you want monitored.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Failed to write example file: {e}");
            ExitCode::FAILURE
        }
    }
}

fn validate_config(path: &str, verbose: bool) -> ExitCode {
    println!("Validating: {path}\n");

    let config = match AutomationConfig::load_from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("✗ Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let finder = &config.autonomous_finder;

    println!("Enabled:        {}", if finder.enabled { "yes" } else { "no" });
    println!("Check interval: {} min", finder.check_interval_minutes);
    match finder.last_checked_at {
        Some(at) => println!("Last checked:   {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("Last checked:   never"),
    }

    if verbose {
        println!();
        for (index, url) in finder.channel_urls.iter().enumerate() {
            println!("[{index}] {url}");
        }
    }

    println!();

    if finder.enabled && finder.channel_urls.is_empty() {
        println!("  ⚠ Warning: finder is enabled but no channels are configured");
    }

    let errors = config.validate_all();
    for e in &errors {
        println!("  ✗ Error: {e}");
    }

    let total = config.channel_count();

    if errors.is_empty() {
        println!("✓ Configuration is valid ({total} channel(s))");
        if finder.check_interval_minutes != DEFAULT_CHECK_INTERVAL_MINUTES {
            println!("  (default interval is {DEFAULT_CHECK_INTERVAL_MINUTES} min)");
        }
        ExitCode::SUCCESS
    } else {
        println!("\n✗ Validation failed: {} error(s)", errors.len());
        ExitCode::FAILURE
    }
}
