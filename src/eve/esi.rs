//! ESI (EVE Swagger Interface) client.
//!
//! Only the handful of public, unauthenticated endpoints the bot needs.

use log::debug;
use reqwest::StatusCode;

use super::api::decode_json;
use super::errors::EveResult;
use super::models::{AllianceInfo, CharacterInfo, CorporationInfo, MarketPrice, RouteFlag, UniverseIds};
use crate::config::EsiConfig;

const SERVICE: &str = "esi";

pub struct EsiClient {
    http: reqwest::Client,
    base_url: String,
    datasource: String,
}

impl EsiClient {
    pub fn new(http: reqwest::Client, config: &EsiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            datasource: config.datasource.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Bulk average/adjusted prices for every market type.
    pub async fn market_prices(&self) -> EveResult<Vec<MarketPrice>> {
        let url = self.url("markets/prices/");
        debug!("Fetching market prices from {}", url);
        let response = self
            .http
            .get(&url)
            .query(&[("datasource", self.datasource.as_str())])
            .send()
            .await?;
        decode_json(response, SERVICE, "market prices").await
    }

    /// System ids along the route, both endpoints included. `None` when ESI
    /// reports there is no route (404).
    pub async fn route(
        &self,
        origin: i64,
        destination: i64,
        flag: RouteFlag,
    ) -> EveResult<Option<Vec<i64>>> {
        let url = self.url(&format!("route/{}/{}/", origin, destination));
        debug!("Fetching {} route {} -> {}", flag.as_str(), origin, destination);
        let response = self
            .http
            .get(&url)
            .query(&[("datasource", self.datasource.as_str()), ("flag", flag.as_str())])
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let hops: Vec<i64> = decode_json(response, SERVICE, "route").await?;
        Ok(Some(hops).filter(|h| !h.is_empty()))
    }

    /// Resolve one free-text name to character/corporation/alliance ids.
    pub async fn resolve_ids(&self, name: &str) -> EveResult<UniverseIds> {
        let url = self.url("universe/ids/");
        let response = self
            .http
            .post(&url)
            .query(&[("datasource", self.datasource.as_str()), ("language", "en-us")])
            .json(&[name])
            .send()
            .await?;
        decode_json(response, SERVICE, "universe ids").await
    }

    pub async fn character(&self, id: i64) -> EveResult<CharacterInfo> {
        self.detail(&format!("characters/{}/", id), "character").await
    }

    pub async fn corporation(&self, id: i64) -> EveResult<CorporationInfo> {
        self.detail(&format!("corporations/{}/", id), "corporation").await
    }

    pub async fn alliance(&self, id: i64) -> EveResult<AllianceInfo> {
        self.detail(&format!("alliances/{}/", id), "alliance").await
    }

    async fn detail<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        what: &'static str,
    ) -> EveResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .query(&[("datasource", self.datasource.as_str())])
            .send()
            .await?;
        decode_json(response, SERVICE, what).await
    }
}
