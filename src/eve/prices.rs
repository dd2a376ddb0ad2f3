//! Time-windowed cache of the ESI bulk price listing.
//!
//! The whole listing is fetched at once and published as a new
//! [`PriceSnapshot`] behind an `Arc`; an existing snapshot is never edited
//! in place. A failed refresh keeps serving the previous snapshot and the
//! next lookup tries again.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, warn};

use super::api::EveApi;
use super::errors::PriceError;
use super::models::MarketPrice;

pub const DEFAULT_PRICE_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Values below this are shown with decimals, at or above as grouped integers.
const DECIMAL_THRESHOLD: f64 = 1000.0;

const SIGNIFICANT_DIGITS: i32 = 6;

#[derive(Debug, Default)]
pub struct PriceSnapshot {
    refreshed_at: Option<Instant>,
    entries: HashMap<i64, MarketPrice>,
}

impl PriceSnapshot {
    fn new(prices: Vec<MarketPrice>, refreshed_at: Instant) -> Self {
        let entries = prices.into_iter().map(|p| (p.type_id, p)).collect();
        Self {
            refreshed_at: Some(refreshed_at),
            entries,
        }
    }

    pub fn refreshed_at(&self) -> Option<Instant> {
        self.refreshed_at
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, type_id: i64) -> Option<&MarketPrice> {
        self.entries.get(&type_id)
    }
}

pub struct PriceCache {
    ttl: Duration,
    snapshot: Arc<PriceSnapshot>,
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_TTL)
    }
}

impl PriceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            snapshot: Arc::new(PriceSnapshot::default()),
        }
    }

    /// The current snapshot; holders keep seeing it even after a refresh.
    pub fn snapshot(&self) -> Arc<PriceSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Stale once strictly older than the TTL, or if never filled.
    pub fn is_stale(&self, now: Instant) -> bool {
        match self.snapshot.refreshed_at {
            None => true,
            Some(at) => now.saturating_duration_since(at) > self.ttl,
        }
    }

    /// Fetch and publish a new snapshot if the current one is stale.
    /// Returns whether a new snapshot was published.
    pub async fn refresh_if_stale<A: EveApi>(&mut self, api: &A, now: Instant) -> bool {
        if !self.is_stale(now) {
            return false;
        }
        match api.market_prices().await {
            Ok(prices) => {
                let fresh = PriceSnapshot::new(prices, now);
                debug!("Price snapshot refreshed with {} entries", fresh.len());
                self.snapshot = Arc::new(fresh);
                true
            }
            Err(e) => {
                warn!(
                    "Price refresh failed, serving previous snapshot ({} entries): {}",
                    self.snapshot.len(),
                    e
                );
                false
            }
        }
    }

    /// Formatted price for a type, refreshing first when stale.
    pub async fn get_price<A: EveApi>(&mut self, api: &A, type_id: i64) -> Result<String, PriceError> {
        self.get_price_at(api, type_id, Instant::now()).await
    }

    pub async fn get_price_at<A: EveApi>(
        &mut self,
        api: &A,
        type_id: i64,
        now: Instant,
    ) -> Result<String, PriceError> {
        self.refresh_if_stale(api, now).await;
        self.lookup(type_id)
    }

    /// Lookup without refreshing. A type missing from the snapshot is an error;
    /// a type present without an average price is the `n/a` sentinel.
    pub fn lookup(&self, type_id: i64) -> Result<String, PriceError> {
        self.snapshot
            .get(type_id)
            .map(format_market_price)
            .ok_or(PriceError::UnknownType(type_id))
    }
}

pub fn format_market_price(price: &MarketPrice) -> String {
    match price.average_price {
        None => "n/a".to_string(),
        Some(avg) => {
            let adj = price
                .adjusted_price
                .map(format_isk)
                .unwrap_or_else(|| "n/a".to_string());
            format!("avg {} adj {}", format_isk(avg), adj)
        }
    }
}

/// `5.23`, `0.004`, `12` below 1000; `1,000`, `12,345,678` at or above.
pub fn format_isk(value: f64) -> String {
    if value < DECIMAL_THRESHOLD {
        format_significant(value)
    } else {
        group_thousands(value.trunc() as i64)
    }
}

/// Up to six significant digits with trailing zeros trimmed. A value below
/// the threshold never rounds up to it.
fn format_significant(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(1) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.parse::<f64>().is_ok_and(|v| v >= DECIMAL_THRESHOLD) {
        return "999.999".to_string();
    }
    trimmed.to_string()
}

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        assert_eq!(format_isk(1000.0), "1,000");
        assert_eq!(format_isk(999.999), "999.999");
        assert_eq!(format_isk(999.9999999), "999.999");
        assert_eq!(format_isk(999.5), "999.5");
    }

    #[test]
    fn decimal_format_trims() {
        assert_eq!(format_isk(5.23), "5.23");
        assert_eq!(format_isk(0.5), "0.5");
        assert_eq!(format_isk(12.0), "12");
        assert_eq!(format_isk(0.0), "0");
        assert_eq!(format_isk(100.0), "100");
        assert_eq!(format_isk(352.145), "352.145");
    }

    #[test]
    fn tiny_prices_keep_significant_digits() {
        assert_eq!(format_isk(0.004), "0.004");
        assert_eq!(format_isk(0.0049), "0.0049");
        assert_eq!(format_isk(0.00012345), "0.00012345");
    }

    #[test]
    fn grouped_format_truncates() {
        assert_eq!(format_isk(12_345_678.9), "12,345,678");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
    }

    #[test]
    fn sentinel_when_average_missing() {
        let price = MarketPrice {
            type_id: 1,
            average_price: None,
            adjusted_price: Some(3.0),
        };
        assert_eq!(format_market_price(&price), "n/a");
        let price = MarketPrice {
            type_id: 1,
            average_price: Some(1500.0),
            adjusted_price: None,
        };
        assert_eq!(format_market_price(&price), "avg 1,500 adj n/a");
    }

    #[test]
    fn empty_cache_is_stale_and_lookup_fails() {
        let cache = PriceCache::default();
        assert!(cache.is_stale(Instant::now()));
        assert_eq!(cache.lookup(34), Err(PriceError::UnknownType(34)));
    }
}
