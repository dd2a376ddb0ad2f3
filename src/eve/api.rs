//! The remote surface handlers depend on.
//!
//! [`EveApi`] is implemented by [`RemoteApi`] (ESI + zKillboard over HTTP);
//! tests drive the handlers with an in-process fake.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::errors::{EveError, EveResult};
use super::esi::EsiClient;
use super::models::{
    AllianceInfo, CharacterInfo, CorporationInfo, EntityKind, KillSummary, KillboardStats,
    MarketPrice, RouteFlag, UniverseIds,
};
use super::zkill::ZkillClient;
use crate::config::Config;

#[allow(async_fn_in_trait)] // handlers run on one task; no Send bound needed
pub trait EveApi {
    async fn market_prices(&self) -> EveResult<Vec<MarketPrice>>;
    async fn route(
        &self,
        origin: i64,
        destination: i64,
        flag: RouteFlag,
    ) -> EveResult<Option<Vec<i64>>>;
    async fn resolve_ids(&self, name: &str) -> EveResult<UniverseIds>;
    async fn character(&self, id: i64) -> EveResult<CharacterInfo>;
    async fn corporation(&self, id: i64) -> EveResult<CorporationInfo>;
    async fn alliance(&self, id: i64) -> EveResult<AllianceInfo>;
    async fn killboard_stats(&self, kind: EntityKind, id: i64) -> EveResult<KillboardStats>;
    async fn latest_kill(&self, kind: EntityKind, id: i64) -> EveResult<Option<KillSummary>>;
}

/// Check the status, then decode the body. Decode failures carry the serde
/// message but never the raw body.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
    service: &'static str,
    what: &'static str,
) -> EveResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(EveError::Status {
            service,
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| EveError::Decode {
        what,
        reason: e.to_string(),
    })
}

/// One long-lived client shared by both services.
pub fn build_http_client(config: &Config) -> EveResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.bot.user_agent.clone());
    if let Some(secs) = config.http.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

pub struct RemoteApi {
    pub esi: EsiClient,
    pub zkill: ZkillClient,
}

impl RemoteApi {
    pub fn new(config: &Config) -> EveResult<Self> {
        let http = build_http_client(config)?;
        Ok(Self {
            esi: EsiClient::new(http.clone(), &config.esi),
            zkill: ZkillClient::new(http, &config.zkill),
        })
    }
}

impl EveApi for RemoteApi {
    async fn market_prices(&self) -> EveResult<Vec<MarketPrice>> {
        self.esi.market_prices().await
    }

    async fn route(
        &self,
        origin: i64,
        destination: i64,
        flag: RouteFlag,
    ) -> EveResult<Option<Vec<i64>>> {
        self.esi.route(origin, destination, flag).await
    }

    async fn resolve_ids(&self, name: &str) -> EveResult<UniverseIds> {
        self.esi.resolve_ids(name).await
    }

    async fn character(&self, id: i64) -> EveResult<CharacterInfo> {
        self.esi.character(id).await
    }

    async fn corporation(&self, id: i64) -> EveResult<CorporationInfo> {
        self.esi.corporation(id).await
    }

    async fn alliance(&self, id: i64) -> EveResult<AllianceInfo> {
        self.esi.alliance(id).await
    }

    async fn killboard_stats(&self, kind: EntityKind, id: i64) -> EveResult<KillboardStats> {
        self.zkill.stats(kind, id).await
    }

    async fn latest_kill(&self, kind: EntityKind, id: i64) -> EveResult<Option<KillSummary>> {
        self.zkill.latest_kill(kind, id).await
    }
}
