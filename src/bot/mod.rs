//! # Bot Core Module
//!
//! Chat-facing side of evebot.
//!
//! - [`parser`] - prefix + keyword recognition of chat lines
//! - [`commands`] - [`CommandProcessor`] dispatch and the [`ReplySink`] seam
//! - [`price`], [`route`], [`distance`], [`who`] - one module per command
//! - [`server`] - runtime wiring and the console transport
//!
//! ```text
//! chat line ─► CommandParser ─► CommandProcessor ─► handler ─► ReplySink
//!                                     │
//!                     StaticData ◄────┼────► EveApi (ESI, zKillboard)
//!                                     │
//!                                PriceCache
//! ```

pub mod commands;
pub mod distance;
pub mod parser;
pub mod price;
pub mod route;
pub mod server;
pub mod who;

pub use commands::{CommandProcessor, ReplySink};
pub use server::EveBot;
