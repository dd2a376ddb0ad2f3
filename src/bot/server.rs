//! Bot runtime: wires config, static data and remote clients into a
//! [`CommandProcessor`] and drives it from the console.
//!
//! The console loop reads one line at a time and awaits the reply before
//! reading the next, so handlers never run concurrently.

use anyhow::{anyhow, Result};
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::commands::{CommandProcessor, ReplySink};
use crate::config::Config;
use crate::eve::prices::PriceCache;
use crate::eve::RemoteApi;
use crate::sde::StaticData;

/// Prints replies to stdout.
pub struct ConsoleSink;

impl ReplySink for ConsoleSink {
    fn reply(&mut self, text: &str) {
        println!("{}", text);
    }
}

pub struct EveBot {
    config: Config,
    processor: CommandProcessor<RemoteApi>,
}

impl EveBot {
    pub fn new(config: Config) -> Result<Self> {
        let sde = StaticData::open(&config.sde.path)
            .map_err(|e| anyhow!("Failed to open static data {}: {}", config.sde.path, e))?;
        let api = RemoteApi::new(&config)?;
        let prices = PriceCache::new(config.esi.price_ttl());
        let processor = CommandProcessor::new(sde, api, prices, config.bot.prefix_char());
        Ok(Self { config, processor })
    }

    /// Run a single line and return the reply, if the line was a command.
    pub async fn ask(&mut self, sender: &str, line: &str) -> Option<String> {
        let mut replies: Vec<String> = Vec::new();
        self.processor.process(sender, line, &mut replies).await;
        replies.pop()
    }

    /// Read commands from stdin until EOF or Ctrl-C.
    pub async fn run(&mut self) -> Result<()> {
        let sender = std::env::var("USER").unwrap_or_else(|_| "console".to_string());
        info!(
            "{} ready; commands use prefix '{}'",
            self.config.bot.name,
            self.config.bot.prefix_char()
        );
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut sink = ConsoleSink;
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if !self.processor.process(&sender, &line, &mut sink).await {
                                debug!("Ignoring non-command line");
                            }
                        }
                        None => break,
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, shutting down");
                    break;
                }
            }
        }
        Ok(())
    }

    pub fn show_status(&self) -> Result<()> {
        let (types, market, systems) = self.processor.static_data().summary()?;
        println!("{} status", self.config.bot.name);
        println!("  static data: {}", self.config.sde.path);
        println!("    types: {} ({} on market)", types, market);
        println!("    solar systems: {}", systems);
        println!("  esi: {} ({})", self.config.esi.base_url, self.config.esi.datasource);
        println!("  price cache ttl: {} min", self.config.esi.price_ttl_minutes);
        println!("  zkillboard: {}", self.config.zkill.base_url);
        Ok(())
    }
}
