//! Test fixtures: an in-memory static data export and a scripted [`EveApi`].
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use evebot::eve::errors::{EveError, EveResult};
use evebot::eve::models::{
    AllianceInfo, CharacterInfo, CorporationInfo, EntityKind, KillSummary, KillboardStats,
    MarketPrice, RouteFlag, UniverseIds,
};
use evebot::eve::EveApi;
use evebot::sde::StaticData;
use rusqlite::Connection;

pub const LY: f64 = 9.4605284e15;

pub const JITA: i64 = 30000142;
pub const PERIMETER: i64 = 30000144;
pub const NIYABAINEN: i64 = 30000143;
pub const TAMA: i64 = 30002813;
pub const EC_P8R: i64 = 30000480;
pub const AMARR: i64 = 30002187;

/// Small SDE with a few items and systems. Amarr sits 50 ly from Jita,
/// Dodixie 4.5 ly.
pub fn static_data() -> StaticData {
    let conn = Connection::open_in_memory().expect("in-memory sqlite");
    conn.execute_batch(
        r#"
        CREATE TABLE "invTypes" ("typeID" INTEGER PRIMARY KEY, "typeName" TEXT, "marketGroupID" INTEGER);
        CREATE TABLE "mapSolarSystems" ("solarSystemID" INTEGER PRIMARY KEY, "solarSystemName" TEXT,
            x REAL, y REAL, z REAL, "security" REAL);
        INSERT INTO "invTypes" VALUES
            (34, 'Tritanium', 1857),
            (35, 'Pyerite', 1857),
            (587, 'Rifter', 64),
            (691, 'Rifter Blueprint', 271),
            (2454, 'Hobgoblin I', 837),
            (2455, 'Hobgoblin I Blueprint', 358),
            (2456, 'Hobgoblin II', 837),
            (40520, 'Large Skill Injector', 2532),
            (63000, 'Tritanium Test Skin', NULL);
        "#,
    )
    .expect("schema");
    let systems = [
        (JITA, "Jita", 0.0, 0.0, 0.0, 0.945913),
        (PERIMETER, "Perimeter", 0.1 * LY, 0.0, 0.0, 0.954),
        (NIYABAINEN, "Niyabainen", 0.2 * LY, 0.0, 0.0, 0.98),
        (TAMA, "Tama", 0.3 * LY, 0.0, 0.0, 0.3),
        (EC_P8R, "EC-P8R", 0.4 * LY, 0.0, 0.0, -0.4),
        (AMARR, "Amarr", 30.0 * LY, 40.0 * LY, 0.0, 1.0),
        (30002537, "Amamake", 1.0 * LY, 1.0 * LY, 1.0 * LY, 0.4),
        (30003504, "Arzad", 2.0 * LY, 0.0, 0.0, 0.6),
        (30002659, "Dodixie", 4.5 * LY, 0.0, 0.0, 0.9),
    ];
    for (id, name, x, y, z, sec) in systems {
        conn.execute(
            r#"INSERT INTO "mapSolarSystems" VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
            rusqlite::params![id, name, x, y, z, sec],
        )
        .expect("insert system");
    }
    StaticData::from_connection(conn)
}

pub fn price(type_id: i64, average: f64, adjusted: f64) -> MarketPrice {
    MarketPrice {
        type_id,
        average_price: Some(average),
        adjusted_price: Some(adjusted),
    }
}

/// Scripted remote services. Every call is recorded in `calls`.
#[derive(Default)]
pub struct FakeApi {
    /// One entry consumed per bulk fetch; `None` answers 503.
    pub price_responses: RefCell<VecDeque<Option<Vec<MarketPrice>>>>,
    pub routes: HashMap<(i64, i64), Vec<i64>>,
    pub route_status: Option<u16>,
    pub ids: HashMap<String, UniverseIds>,
    pub ids_status: Option<u16>,
    pub characters: HashMap<i64, CharacterInfo>,
    pub character_status: Option<u16>,
    pub corporations: HashMap<i64, CorporationInfo>,
    pub alliances: HashMap<i64, AllianceInfo>,
    pub stats: HashMap<(&'static str, i64), KillboardStats>,
    pub stats_status: Option<u16>,
    pub kills: HashMap<i64, KillSummary>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with_prices(responses: Vec<Option<Vec<MarketPrice>>>) -> Self {
        Self {
            price_responses: RefCell::new(responses.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn status(status: u16) -> EveError {
    EveError::Status {
        service: "fake",
        status,
    }
}

impl EveApi for FakeApi {
    async fn market_prices(&self) -> EveResult<Vec<MarketPrice>> {
        self.record("market_prices".into());
        match self.price_responses.borrow_mut().pop_front() {
            Some(Some(prices)) => Ok(prices),
            _ => Err(status(503)),
        }
    }

    async fn route(
        &self,
        origin: i64,
        destination: i64,
        flag: RouteFlag,
    ) -> EveResult<Option<Vec<i64>>> {
        self.record(format!("route {} {} {}", origin, destination, flag.as_str()));
        if let Some(code) = self.route_status {
            return Err(status(code));
        }
        Ok(self.routes.get(&(origin, destination)).cloned())
    }

    async fn resolve_ids(&self, name: &str) -> EveResult<UniverseIds> {
        self.record(format!("resolve_ids {}", name));
        if let Some(code) = self.ids_status {
            return Err(status(code));
        }
        Ok(self.ids.get(&name.to_lowercase()).cloned().unwrap_or_default())
    }

    async fn character(&self, id: i64) -> EveResult<CharacterInfo> {
        self.record(format!("character {}", id));
        if let Some(code) = self.character_status {
            return Err(status(code));
        }
        self.characters.get(&id).cloned().ok_or_else(|| status(404))
    }

    async fn corporation(&self, id: i64) -> EveResult<CorporationInfo> {
        self.record(format!("corporation {}", id));
        self.corporations.get(&id).cloned().ok_or_else(|| status(404))
    }

    async fn alliance(&self, id: i64) -> EveResult<AllianceInfo> {
        self.record(format!("alliance {}", id));
        self.alliances.get(&id).cloned().ok_or_else(|| status(404))
    }

    async fn killboard_stats(&self, kind: EntityKind, id: i64) -> EveResult<KillboardStats> {
        self.record(format!("stats {} {}", kind.zkill_key(), id));
        if let Some(code) = self.stats_status {
            return Err(status(code));
        }
        Ok(self.stats.get(&(kind.zkill_key(), id)).cloned().unwrap_or_default())
    }

    async fn latest_kill(&self, kind: EntityKind, id: i64) -> EveResult<Option<KillSummary>> {
        self.record(format!("latest_kill {} {}", kind.zkill_key(), id));
        Ok(self.kills.get(&id).cloned())
    }
}
