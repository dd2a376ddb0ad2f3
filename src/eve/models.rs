//! Typed records for the remote JSON payloads we consume.
//!
//! Every field the services may omit is an `Option` (or defaults), so a
//! sparse response decodes instead of failing the whole command.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of `GET /markets/prices/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrice {
    pub type_id: i64,
    #[serde(default)]
    pub average_price: Option<f64>,
    #[serde(default)]
    pub adjusted_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedId {
    pub id: i64,
    pub name: String,
}

/// Response of `POST /universe/ids/`. Categories we do not use are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniverseIds {
    #[serde(default)]
    pub characters: Vec<NamedId>,
    #[serde(default)]
    pub corporations: Vec<NamedId>,
    #[serde(default)]
    pub alliances: Vec<NamedId>,
}

impl UniverseIds {
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.corporations.is_empty() && self.alliances.is_empty()
    }

    pub fn character_id(&self) -> Option<i64> {
        self.characters.first().map(|c| c.id)
    }

    pub fn corporation_id(&self) -> Option<i64> {
        self.corporations.first().map(|c| c.id)
    }

    pub fn alliance_id(&self) -> Option<i64> {
        self.alliances.first().map(|a| a.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterInfo {
    pub name: String,
    pub corporation_id: i64,
    #[serde(default)]
    pub alliance_id: Option<i64>,
    #[serde(default)]
    pub birthday: Option<DateTime<Utc>>,
    #[serde(default)]
    pub security_status: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporationInfo {
    pub name: String,
    pub ticker: String,
    #[serde(default)]
    pub member_count: Option<u64>,
    #[serde(default)]
    pub alliance_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllianceInfo {
    pub name: String,
    pub ticker: String,
    #[serde(default)]
    pub date_founded: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivePvp {
    #[serde(default)]
    pub characters: Option<Counter>,
}

/// Aggregate counters from zKillboard `/stats/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KillboardStats {
    #[serde(rename = "shipsDestroyed", default)]
    pub ships_destroyed: Option<u64>,
    #[serde(rename = "shipsLost", default)]
    pub ships_lost: Option<u64>,
    #[serde(rename = "activepvp", default)]
    pub active_pvp: Option<ActivePvp>,
}

impl KillboardStats {
    pub fn kills(&self) -> u64 {
        self.ships_destroyed.unwrap_or(0)
    }

    pub fn losses(&self) -> u64 {
        self.ships_lost.unwrap_or(0)
    }

    /// Characters seen on a killmail in the last week.
    pub fn active_characters(&self) -> u64 {
        self.active_pvp
            .as_ref()
            .and_then(|a| a.characters.as_ref())
            .and_then(|c| c.count)
            .unwrap_or(0)
    }
}

/// First entry of a zKillboard kill list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillSummary {
    pub killmail_id: i64,
    #[serde(default)]
    pub killmail_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Character,
    Corporation,
    Alliance,
}

impl EntityKind {
    /// Path segment zKillboard uses for this kind.
    pub fn zkill_key(self) -> &'static str {
        match self {
            EntityKind::Character => "characterID",
            EntityKind::Corporation => "corporationID",
            EntityKind::Alliance => "allianceID",
        }
    }
}

/// Route preference passed to ESI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFlag {
    Shortest,
    Secure,
}

impl RouteFlag {
    /// `safe` and `secure` select the high-sec preferring route; anything else is shortest.
    pub fn from_word(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "safe" | "secure" => RouteFlag::Secure,
            _ => RouteFlag::Shortest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteFlag::Shortest => "shortest",
            RouteFlag::Secure => "secure",
        }
    }
}
