//! zKillboard client: aggregate stats and most recent kill per entity.

use log::debug;

use super::api::decode_json;
use super::errors::EveResult;
use super::models::{EntityKind, KillSummary, KillboardStats};
use crate::config::ZkillConfig;

const SERVICE: &str = "zkillboard";

pub struct ZkillClient {
    http: reqwest::Client,
    base_url: String,
}

impl ZkillClient {
    pub fn new(http: reqwest::Client, config: &ZkillConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn stats_url(&self, kind: EntityKind, id: i64) -> String {
        format!("{}/stats/{}/{}/", self.base_url, kind.zkill_key(), id)
    }

    pub fn kills_url(&self, kind: EntityKind, id: i64) -> String {
        format!("{}/{}/{}/", self.base_url, kind.zkill_key(), id)
    }

    pub async fn stats(&self, kind: EntityKind, id: i64) -> EveResult<KillboardStats> {
        let url = self.stats_url(kind, id);
        debug!("Fetching killboard stats from {}", url);
        let response = self.http.get(&url).send().await?;
        decode_json(response, SERVICE, "killboard stats").await
    }

    /// Most recent killmail involving the entity, if any.
    pub async fn latest_kill(&self, kind: EntityKind, id: i64) -> EveResult<Option<KillSummary>> {
        let url = self.kills_url(kind, id);
        debug!("Fetching latest kill from {}", url);
        let response = self.http.get(&url).send().await?;
        let kills: Vec<KillSummary> = decode_json(response, SERVICE, "kill list").await?;
        Ok(kills.into_iter().next())
    }
}
