//! Binary entrypoint for the evebot CLI.
//!
//! Commands:
//! - `run` - read chat commands from stdin and print replies
//! - `ask <line>` - answer one command and exit
//! - `init` - write a starter `config.toml`
//! - `status` - print static data and endpoint summary
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use evebot::bot::EveBot;
use evebot::config::Config;

#[derive(Parser)]
#[command(name = "evebot")]
#[command(about = "Chat companion bot for EVE Online")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin, one per line
    Run,
    /// Answer a single command, e.g. `evebot ask "!pc Tritanium"`
    Ask {
        /// The chat line, including the command prefix
        line: String,
        /// Name used as the sender in replies
        #[arg(short, long, default_value = "console")]
        sender: String,
    },
    /// Write a default configuration file
    Init,
    /// Show static data and endpoint summary
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Run => {
            let config = load_config(&cli.config, cli.verbose).await;
            info!("Starting evebot v{}", env!("CARGO_PKG_VERSION"));
            let mut bot = EveBot::new(config)?;
            bot.run().await?;
        }
        Commands::Ask { line, sender } => {
            let config = load_config(&cli.config, cli.verbose).await;
            let mut bot = EveBot::new(config)?;
            match bot.ask(&sender, &line).await {
                Some(reply) => println!("{}", reply),
                None => eprintln!("Not a command: {}", line),
            }
        }
        Commands::Status => {
            let config = load_config(&cli.config, cli.verbose).await;
            let bot = EveBot::new(config)?;
            bot.show_status()?;
        }
    }

    Ok(())
}

/// Load the config and start logging. A missing file is not fatal: every
/// section has defaults.
async fn load_config(path: &str, verbosity: u8) -> Config {
    let config = match Config::load(path).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} (using defaults)", e);
            Config::default()
        }
    };
    init_logging(&Some(config.clone()), verbosity);
    config
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity wins; otherwise the configured level.
    let configured = config
        .as_ref()
        .and_then(|c| c.logging.level.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let level = match verbosity {
        0 => configured,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    let log_file = config
        .as_ref()
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    match log_file {
        Some(f) => {
            let file = std::sync::Mutex::new(f);
            // Replies go to stdout; only echo log lines there when a human is watching.
            let is_tty = atty::is(atty::Stream::Stdout);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = file.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None => {
            builder.format(|fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
            });
        }
    }
    let _ = builder.try_init();
}
