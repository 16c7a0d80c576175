use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api::{classify_status, classify_transport, ApiError};
use super::cache::{fetch_cached, TtlCache};
use super::coindata::{chart_points, map_detail, CoinData, CoinDetailRaw, CoinSummary, MarketChartRaw, PriceMetric, PricePoint};

/// Compile-time base URL; see build.rs for the proxy override.
pub const API_BASE_URL: &str = env!("COINGECKO_API_URL");

// Freshness windows per resource. The markets listing backs the dashboard's
// two-minute polling cycle; detail and history follow the one-minute window
// of the coin pages.
pub const LIST_TTL_MS: i64 = 120_000;
pub const DETAIL_TTL_MS: i64 = 60_000;
pub const CHART_TTL_MS: i64 = 60_000;

const VS_CURRENCY: &str = "usd";

/// Sort order accepted by the markets listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeckoOrder {
  MarketCapDesc,
  MarketCapAsc,
  VolumeDesc,
  VolumeAsc,
}

impl fmt::Display for GeckoOrder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GeckoOrder::MarketCapDesc => write!(f, "market_cap_desc"),
      GeckoOrder::MarketCapAsc => write!(f, "market_cap_asc"),
      GeckoOrder::VolumeDesc => write!(f, "volume_desc"),
      GeckoOrder::VolumeAsc => write!(f, "volume_asc"),
    }
  }
}

/// Thin caching client for the market data API. Cloning shares the HTTP
/// client and the cache, so a single instance provided through context
/// serves every page; tests construct isolated instances instead.
#[derive(Clone)]
pub struct MarketApi {
  client: reqwest::Client,
  base_url: String,
  cache: TtlCache,
}

impl MarketApi {
  pub fn new() -> Self {
    Self::with_base_url(API_BASE_URL)
  }

  pub fn with_base_url(base_url: &str) -> Self {
    MarketApi {
      client: reqwest::Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      cache: TtlCache::new(),
    }
  }

  async fn get_json<T: DeserializeOwned>(
    &self,
    path: &str,
    params: &[(&str, String)],
  ) -> Result<T, ApiError> {
    let url = format!("{}{}", self.base_url, path);
    let resp = self
      .client
      .get(&url)
      .query(params)
      .send()
      .await
      .map_err(classify_transport)?;

    let status = resp.status().as_u16();
    if !(200..300).contains(&status) {
      let body = resp.text().await.unwrap_or_default();
      return Err(classify_status(status, &body));
    }
    resp
      .json::<T>()
      .await
      .map_err(|e| ApiError::Unknown(format!("failed to decode {}: {}", path, e)))
  }

  async fn get_cached<T>(
    &self,
    key: &str,
    ttl_ms: i64,
    path: &str,
    params: &[(&str, String)],
  ) -> Result<T, ApiError>
  where
    T: Serialize + DeserializeOwned,
  {
    fetch_cached(&self.cache, key, ttl_ms, || self.get_json::<T>(path, params)).await
  }

  /// One page of asset summaries, freshest-first per `order`.
  pub async fn coin_markets(
    &self,
    page: u32,
    per_page: u32,
    order: GeckoOrder,
  ) -> Result<Vec<CoinSummary>, ApiError> {
    let key = format!("markets:{}:{}:{}", order, per_page, page);
    let params = [
      ("vs_currency", VS_CURRENCY.to_string()),
      ("order", order.to_string()),
      ("per_page", per_page.to_string()),
      ("page", page.to_string()),
      ("sparkline", "false".to_string()),
    ];
    self.get_cached(&key, LIST_TTL_MS, "/coins/markets", &params).await
  }

  /// Full detail for one asset, flattened into the page view-model. The raw
  /// payload is what gets cached, so the mapper runs per call and stays the
  /// only place that knows the nested shape.
  pub async fn coin_data(&self, id: &str) -> Result<CoinData, ApiError> {
    let key = format!("coin:{}", id);
    let path = format!("/coins/{}", id);
    let raw: CoinDetailRaw = self.get_cached(&key, DETAIL_TTL_MS, &path, &[]).await?;
    Ok(map_detail(&raw))
  }

  /// Price history samples for the chosen metric over the lookback window.
  pub async fn price_history(
    &self,
    id: &str,
    days: u32,
    metric: PriceMetric,
  ) -> Result<Vec<PricePoint>, ApiError> {
    let key = format!("chart:{}:{}:{}", id, days, metric);
    let path = format!("/coins/{}/market_chart", id);
    let params = [
      ("vs_currency", VS_CURRENCY.to_string()),
      ("days", days.to_string()),
    ];
    let raw: MarketChartRaw = self.get_cached(&key, CHART_TTL_MS, &path, &params).await?;
    Ok(chart_points(&raw, metric))
  }
}

impl Default for MarketApi {
  fn default() -> Self {
    Self::new()
  }
}

/// Monotonic generation counter enforcing "last request wins" for a UI slot.
///
/// Every request takes a ticket before starting; a response may only touch
/// visible state while its ticket is still the latest one issued. Superseded
/// in-flight requests resolve into nothing instead of clobbering newer
/// state. The same ticket check after a quiet-period sleep gives the
/// debounced fetch variant without timers or cancellation tokens.
#[derive(Clone, Default)]
pub struct RequestSeq {
  latest: Rc<Cell<u64>>,
}

impl RequestSeq {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn issue(&self) -> u64 {
    let next = self.latest.get() + 1;
    self.latest.set(next);
    next
  }

  pub fn is_current(&self, ticket: u64) -> bool {
    self.latest.get() == ticket
  }
}

/// Quiet period for user-driven parameter churn (search box, day range,
/// metric toggle) before a network call goes out.
pub const DEBOUNCE_MS: u64 = 300;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn later_request_supersedes_earlier_one() {
    let seq = RequestSeq::new();
    let r1 = seq.issue();
    let r2 = seq.issue();

    // r1 resolves after r2 was issued: it must be discarded
    assert!(!seq.is_current(r1));
    assert!(seq.is_current(r2));
  }

  #[test]
  fn resolution_order_does_not_matter() {
    let seq = RequestSeq::new();
    let r1 = seq.issue();
    let r2 = seq.issue();
    let r3 = seq.issue();

    // whichever order r1/r2 come back in, only r3 may apply
    for stale in [r2, r1] {
      assert!(!seq.is_current(stale));
    }
    assert!(seq.is_current(r3));
  }

  #[test]
  fn clones_share_the_counter() {
    let seq = RequestSeq::new();
    let handle = seq.clone();
    let r1 = seq.issue();
    let r2 = handle.issue();
    assert!(!seq.is_current(r1));
    assert!(seq.is_current(r2));
  }

  #[test]
  fn order_params_match_upstream_contract() {
    assert_eq!(GeckoOrder::MarketCapDesc.to_string(), "market_cap_desc");
    assert_eq!(GeckoOrder::VolumeAsc.to_string(), "volume_asc");
  }

  #[test]
  fn cache_keys_encode_the_full_argument_tuple() {
    // distinct argument tuples must never collide in the shared keyspace
    let keys = [
      format!("markets:{}:{}:{}", GeckoOrder::MarketCapDesc, 100, 1),
      format!("markets:{}:{}:{}", GeckoOrder::MarketCapDesc, 100, 2),
      format!("markets:{}:{}:{}", GeckoOrder::VolumeDesc, 100, 1),
      format!("chart:{}:{}:{}", "bitcoin", 30, PriceMetric::Prices),
      format!("chart:{}:{}:{}", "bitcoin", 30, PriceMetric::MarketCaps),
      format!("chart:{}:{}:{}", "bitcoin", 7, PriceMetric::Prices),
      format!("coin:{}", "bitcoin"),
    ];
    for (i, a) in keys.iter().enumerate() {
      for b in keys.iter().skip(i + 1) {
        assert_ne!(a, b);
      }
    }
  }
}
