use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/* Market data API responses */

/// One row of the `/coins/markets` listing. CoinGecko nulls out numeric
/// fields for thinly traded assets, so everything beyond the identity
/// triple is optional and display code formats the gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
  pub id: String,
  pub symbol: String,
  pub name: String,
  #[serde(default)]
  pub image: String,
  #[serde(default)]
  pub current_price: Option<f64>,
  #[serde(default)]
  pub market_cap: Option<f64>,
  #[serde(default)]
  pub total_volume: Option<f64>,
  #[serde(default)]
  pub price_change_percentage_24h: Option<f64>,
  #[serde(default)]
  pub market_cap_rank: Option<u32>,
}

/// Raw `/coins/{id}` payload, kept nested exactly as the API ships it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinDetailRaw {
  pub id: String,
  pub symbol: String,
  pub name: String,
  #[serde(default)]
  pub description: Option<LocalizedText>,
  #[serde(default)]
  pub image: Option<ImageSet>,
  #[serde(default)]
  pub market_cap_rank: Option<u32>,
  #[serde(default)]
  pub market_data: Option<MarketData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
  #[serde(default)]
  pub en: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
  #[serde(default)]
  pub thumb: Option<String>,
  #[serde(default)]
  pub small: Option<String>,
  #[serde(default)]
  pub large: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
  #[serde(default)]
  pub current_price: HashMap<String, f64>,
  #[serde(default)]
  pub market_cap: HashMap<String, f64>,
  #[serde(default)]
  pub total_volume: HashMap<String, f64>,
  #[serde(default)]
  pub price_change_percentage_24h: Option<f64>,
}

/// Flat view-model for the coin and compare pages. Built once per page view
/// by `map_detail`; display code never walks nested payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinData {
  pub id: String,
  pub symbol: String,
  pub name: String,
  pub desc: String,
  pub image: String,
  pub market_cap_rank: Option<u32>,
  pub current_price: Option<f64>,
  pub market_cap: Option<f64>,
  pub total_volume: Option<f64>,
  pub price_change_percentage_24h: Option<f64>,
}

/// Flattens the nested detail payload with defensive defaults: missing
/// numerics stay `None`, a missing description becomes the empty string.
/// Pure function; no I/O, deterministic for the same input.
pub fn map_detail(raw: &CoinDetailRaw) -> CoinData {
  let market = raw.market_data.clone().unwrap_or_default();
  let usd = |m: &HashMap<String, f64>| m.get("usd").copied();

  CoinData {
    id: raw.id.clone(),
    symbol: raw.symbol.clone(),
    name: raw.name.clone(),
    desc: raw
      .description
      .as_ref()
      .and_then(|d| d.en.clone())
      .unwrap_or_default(),
    image: raw
      .image
      .as_ref()
      .and_then(|i| i.large.clone().or_else(|| i.small.clone()).or_else(|| i.thumb.clone()))
      .unwrap_or_default(),
    market_cap_rank: raw.market_cap_rank,
    current_price: usd(&market.current_price),
    market_cap: usd(&market.market_cap),
    total_volume: usd(&market.total_volume),
    price_change_percentage_24h: market.price_change_percentage_24h,
  }
}

impl From<&CoinData> for CoinSummary {
  fn from(coin: &CoinData) -> Self {
    CoinSummary {
      id: coin.id.clone(),
      symbol: coin.symbol.clone(),
      name: coin.name.clone(),
      image: coin.image.clone(),
      current_price: coin.current_price,
      market_cap: coin.market_cap,
      total_volume: coin.total_volume,
      price_change_percentage_24h: coin.price_change_percentage_24h,
      market_cap_rank: coin.market_cap_rank,
    }
  }
}

/* Price history */

/// Which `/market_chart` array to plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceMetric {
  Prices,
  MarketCaps,
  TotalVolumes,
}

impl PriceMetric {
  pub fn label(&self) -> &'static str {
    match self {
      PriceMetric::Prices => "Price",
      PriceMetric::MarketCaps => "Market Cap",
      PriceMetric::TotalVolumes => "Volume",
    }
  }
}

impl fmt::Display for PriceMetric {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PriceMetric::Prices => write!(f, "prices"),
      PriceMetric::MarketCaps => write!(f, "market_caps"),
      PriceMetric::TotalVolumes => write!(f, "total_volumes"),
    }
  }
}

/// Raw `/coins/{id}/market_chart` payload: three parallel arrays of
/// `[timestamp_ms, value]` pairs. Values can be null for thin history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChartRaw {
  #[serde(default)]
  pub prices: Vec<Vec<Option<f64>>>,
  #[serde(default)]
  pub market_caps: Vec<Vec<Option<f64>>>,
  #[serde(default)]
  pub total_volumes: Vec<Vec<Option<f64>>>,
}

/// A single sample of the selected metric, ascending by timestamp as the
/// API returns them. Gaps are not filled; a null upstream value becomes NaN
/// here and turns into a chart gap in the series builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
  pub timestamp_ms: i64,
  pub value: f64,
}

pub fn chart_points(raw: &MarketChartRaw, metric: PriceMetric) -> Vec<PricePoint> {
  let rows = match metric {
    PriceMetric::Prices => &raw.prices,
    PriceMetric::MarketCaps => &raw.market_caps,
    PriceMetric::TotalVolumes => &raw.total_volumes,
  };
  rows
    .iter()
    .filter_map(|pair| {
      let ts = pair.first().copied().flatten()? as i64;
      let value = pair.get(1).copied().flatten().unwrap_or(f64::NAN);
      Some(PricePoint { timestamp_ms: ts, value })
    })
    .collect()
}

/* Display helpers shared by list rows, grid tiles and chart tooltips */

pub fn format_usd(value: Option<f64>) -> String {
  match value {
    Some(v) if v.is_finite() => {
      if v >= 1.0 {
        let formatted = format!("{:.2}", v);
        format!("${}", group_thousands(&formatted))
      } else {
        format!("${:.6}", v)
      }
    }
    _ => "—".to_string(),
  }
}

/// Compact `$1.2M` style used where space is tight.
pub fn format_usd_compact(value: Option<f64>) -> String {
  match value {
    Some(v) if v.is_finite() => {
      if v >= 1_000_000_000.0 {
        format!("${:.1}B", v / 1_000_000_000.0)
      } else if v >= 1_000_000.0 {
        format!("${:.1}M", v / 1_000_000.0)
      } else if v >= 1_000.0 {
        format!("${:.1}K", v / 1_000.0)
      } else {
        format!("${:.2}", v)
      }
    }
    _ => "—".to_string(),
  }
}

pub fn format_pct(value: Option<f64>) -> String {
  match value {
    Some(v) if v.is_finite() => format!("{:+.2}%", v),
    _ => "—".to_string(),
  }
}

fn group_thousands(formatted: &str) -> String {
  let (int_part, frac_part) = match formatted.split_once('.') {
    Some((i, f)) => (i, Some(f)),
    None => (formatted, None),
  };
  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (idx, ch) in int_part.chars().enumerate() {
    if idx > 0 && (int_part.len() - idx) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }
  match frac_part {
    Some(f) => format!("{}.{}", grouped, f),
    None => grouped,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_detail() -> CoinDetailRaw {
    serde_json::from_str(
      r#"{
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "description": {"en": "Bitcoin is the first cryptocurrency."},
        "image": {"large": "https://img.test/btc-large.png"},
        "market_cap_rank": 1,
        "market_data": {
          "current_price": {"usd": 97000.12, "eur": 89000.0},
          "market_cap": {"usd": 1900000000000.0},
          "total_volume": {"usd": 32000000000.0},
          "price_change_percentage_24h": -1.25
        },
        "links": {"homepage": ["https://bitcoin.org"]},
        "genesis_date": "2009-01-03"
      }"#,
    )
    .expect("sample detail payload should deserialize")
  }

  #[test]
  fn map_detail_flattens_nested_payload() {
    let coin = map_detail(&sample_detail());
    assert_eq!(coin.id, "bitcoin");
    assert_eq!(coin.desc, "Bitcoin is the first cryptocurrency.");
    assert_eq!(coin.image, "https://img.test/btc-large.png");
    assert_eq!(coin.current_price, Some(97000.12));
    assert_eq!(coin.market_cap_rank, Some(1));
    assert_eq!(coin.price_change_percentage_24h, Some(-1.25));
  }

  #[test]
  fn map_detail_is_deterministic() {
    let raw = sample_detail();
    assert_eq!(map_detail(&raw), map_detail(&raw));
  }

  #[test]
  fn map_detail_defaults_missing_fields() {
    let raw: CoinDetailRaw =
      serde_json::from_str(r#"{"id": "obscurecoin", "symbol": "obs", "name": "Obscure"}"#).unwrap();
    let coin = map_detail(&raw);
    assert_eq!(coin.desc, "");
    assert_eq!(coin.image, "");
    assert_eq!(coin.current_price, None);
    assert_eq!(coin.market_cap, None);
    assert_eq!(coin.total_volume, None);
    assert_eq!(coin.market_cap_rank, None);
  }

  #[test]
  fn summary_tolerates_missing_numeric_fields() {
    let coin: CoinSummary =
      serde_json::from_str(r#"{"id": "x", "symbol": "x", "name": "X", "image": "u"}"#).unwrap();
    assert_eq!(coin.current_price, None);
    assert_eq!(coin.market_cap_rank, None);
  }

  #[test]
  fn chart_points_selects_metric_and_keeps_order() {
    let raw: MarketChartRaw = serde_json::from_str(
      r#"{
        "prices": [[1700000000000, 1.0], [1700003600000, 2.0]],
        "market_caps": [[1700000000000, 10.0], [1700003600000, 20.0]],
        "total_volumes": [[1700000000000, 100.0], [1700003600000, 200.0]]
      }"#,
    )
    .unwrap();
    let points = chart_points(&raw, PriceMetric::MarketCaps);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].value, 10.0);
    assert!(points[0].timestamp_ms < points[1].timestamp_ms);
  }

  #[test]
  fn chart_points_null_value_becomes_nan() {
    let raw: MarketChartRaw =
      serde_json::from_str(r#"{"prices": [[1700000000000, null], [1700003600000, 2.0]]}"#).unwrap();
    let points = chart_points(&raw, PriceMetric::Prices);
    assert_eq!(points.len(), 2);
    assert!(points[0].value.is_nan());
    assert_eq!(points[1].value, 2.0);
  }

  #[test]
  fn usd_formatting() {
    assert_eq!(format_usd(Some(1234567.891)), "$1,234,567.89");
    assert_eq!(format_usd(Some(0.00001234)), "$0.000012");
    assert_eq!(format_usd(None), "—");
    assert_eq!(format_usd_compact(Some(1_940_000_000_000.0)), "$1940.0B");
    assert_eq!(format_usd_compact(Some(1_500.0)), "$1.5K");
    assert_eq!(format_pct(Some(2.5)), "+2.50%");
    assert_eq!(format_pct(Some(-1.234)), "-1.23%");
  }
}
