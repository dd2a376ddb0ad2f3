//! # evebot - chat companion for EVE Online
//!
//! Command handlers that answer chat questions from a local static data
//! export (SQLite) plus live data from ESI and zKillboard.
//!
//! ## Commands
//!
//! - `!pc <item>` - average and adjusted market price
//! - `!jumps <from> <to> [secure]` - route with security transitions
//! - `!ly <from> <to>` - light-years and the jump drive level each ship class needs
//! - `!who <name>` - character, corporation and alliance summary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use evebot::bot::EveBot;
//! use evebot::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let mut bot = EveBot::new(config)?;
//!     if let Some(reply) = bot.ask("pilot", "!pc Tritanium").await {
//!         println!("{}", reply);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`bot`] - command parsing, dispatch, handlers and the console runtime
//! - [`eve`] - ESI / zKillboard clients, price cache, name resolver
//! - [`sde`] - read-only static data queries
//! - [`config`] - TOML configuration
//! - [`logutil`] - single-line log escaping

pub mod bot;
pub mod config;
pub mod eve;
pub mod logutil;
pub mod sde;
