//! Command processing: parse a chat line, run the matching handler, send one reply.

use chrono::Utc;
use log::{error, info};

use super::parser::{BotCommand, CommandParser};
use super::{distance, price, route, who};
use crate::eve::prices::PriceCache;
use crate::eve::EveApi;
use crate::logutil::escape_log;
use crate::sde::StaticData;

/// Where handler replies go. The chat transport supplies one per command.
pub trait ReplySink {
    fn reply(&mut self, text: &str);
}

impl ReplySink for Vec<String> {
    fn reply(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Wrap in a chat code block so columns line up.
pub fn code_block(text: &str) -> String {
    format!("```{}```", text)
}

pub fn help_text(prefix: char) -> String {
    format!(
        "Commands:\n  {p}pc <item>              market price (avg/adj)\n  {p}jumps <from> <to> [secure]  route and jump count\n  {p}ly <from> <to>         light-years and jump drive levels\n  {p}who <name>             pilot / corp / alliance summary",
        p = prefix
    )
}

pub struct CommandProcessor<A: EveApi> {
    parser: CommandParser,
    sde: StaticData,
    api: A,
    prices: PriceCache,
}

impl<A: EveApi> CommandProcessor<A> {
    pub fn new(sde: StaticData, api: A, prices: PriceCache, prefix: char) -> Self {
        Self {
            parser: CommandParser::with_prefix(prefix),
            sde,
            api,
            prices,
        }
    }

    pub fn static_data(&self) -> &StaticData {
        &self.sde
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn price_cache(&self) -> &PriceCache {
        &self.prices
    }

    /// Handle one chat line. Returns false (and sends nothing) when the line
    /// is not a command for this bot.
    pub async fn process(&mut self, sender: &str, line: &str, sink: &mut dyn ReplySink) -> bool {
        let command = self.parser.parse(line);
        if command == BotCommand::Unknown {
            return false;
        }
        info!("{} -> {}", escape_log(sender), escape_log(line));
        let reply = self.execute(sender, command).await;
        sink.reply(&reply);
        true
    }

    pub async fn execute(&mut self, sender: &str, command: BotCommand) -> String {
        let prefix = self.parser.prefix();
        let result = match command {
            BotCommand::Help => Ok(help_text(prefix)),
            BotCommand::PriceCheck(args) => {
                price::price_check(&self.sde, &mut self.prices, &self.api, prefix, &args).await
            }
            BotCommand::Jumps(args) => route::jumps(&self.sde, &self.api, prefix, &args).await,
            BotCommand::LightYears(args) => distance::lightyears(&self.sde, prefix, &args),
            BotCommand::Who(args) => Ok(who::who(&self.api, sender, prefix, &args, Utc::now()).await),
            BotCommand::Unknown => return String::new(),
        };
        result.unwrap_or_else(|e| {
            error!("Static data query failed: {}", e);
            "internal error".to_string()
        })
    }
}
