//! # EVE data layer
//!
//! - [`esi`] / [`zkill`] - HTTP clients for the two remote services
//! - [`api`] - the [`EveApi`] trait handlers depend on, and its HTTP implementation
//! - [`models`] - typed response records
//! - [`prices`] - bulk price snapshot cache and price formatting
//! - [`resolver`] - item name disambiguation
//! - [`humanize`] - time spans and security labels for replies

pub mod api;
pub mod errors;
pub mod esi;
pub mod humanize;
pub mod models;
pub mod prices;
pub mod resolver;
pub mod zkill;

pub use api::{EveApi, RemoteApi};
pub use errors::{EveError, EveResult, PriceError};
