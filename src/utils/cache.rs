use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api::ApiError;

/// Milliseconds since the unix epoch.
pub fn now_ms() -> i64 {
  #[cfg(target_arch = "wasm32")]
  {
    js_sys::Date::now() as i64
  }
  #[cfg(not(target_arch = "wasm32"))]
  {
    std::time::SystemTime::now()
      .duration_since(std::time::UNIX_EPOCH)
      .map(|d| d.as_millis() as i64)
      .unwrap_or(0)
  }
}

struct CacheEntry {
  payload: Value,
  fetched_at_ms: i64,
}

/// In-memory response cache with a freshness window checked on read.
///
/// Entries are never evicted; a stale entry is simply ignored until the next
/// successful fetch overwrites it. Absent and expired look the same to
/// callers. Cloning shares the underlying store, so one cache can be handed
/// to every page through context while tests construct their own isolated
/// instances with a manual clock.
#[derive(Clone)]
pub struct TtlCache {
  entries: Rc<RefCell<HashMap<String, CacheEntry>>>,
  clock: Rc<dyn Fn() -> i64>,
}

impl TtlCache {
  pub fn new() -> Self {
    Self::with_clock(now_ms)
  }

  pub fn with_clock(clock: impl Fn() -> i64 + 'static) -> Self {
    TtlCache {
      entries: Rc::new(RefCell::new(HashMap::new())),
      clock: Rc::new(clock),
    }
  }

  /// Returns the stored payload only while it is younger than `ttl_ms`.
  pub fn get(&self, key: &str, ttl_ms: i64) -> Option<Value> {
    let entries = self.entries.borrow();
    let entry = entries.get(key)?;
    if (self.clock)() - entry.fetched_at_ms < ttl_ms {
      Some(entry.payload.clone())
    } else {
      None
    }
  }

  /// Unconditionally overwrites any existing entry, restamping it.
  pub fn put(&self, key: &str, payload: Value) {
    self.entries.borrow_mut().insert(
      key.to_string(),
      CacheEntry { payload, fetched_at_ms: (self.clock)() },
    );
  }
}

impl Default for TtlCache {
  fn default() -> Self {
    Self::new()
  }
}

/// Consult the cache, falling back to `load` on a miss. A failed load leaves
/// any previous (stale) entry in place for a later successful refresh to
/// overwrite.
pub async fn fetch_cached<T, F, Fut>(
  cache: &TtlCache,
  key: &str,
  ttl_ms: i64,
  load: F,
) -> Result<T, ApiError>
where
  T: Serialize + DeserializeOwned,
  F: FnOnce() -> Fut,
  Fut: Future<Output = Result<T, ApiError>>,
{
  if let Some(hit) = cache.get(key, ttl_ms) {
    // a payload we stored ourselves should always decode; fall through to a
    // fresh fetch if it somehow doesn't
    if let Ok(value) = serde_json::from_value::<T>(hit) {
      return Ok(value);
    }
  }
  let fresh = load().await?;
  let payload = serde_json::to_value(&fresh)
    .map_err(|e| ApiError::Unknown(format!("failed to serialize cache payload: {}", e)))?;
  cache.put(key, payload);
  Ok(fresh)
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::executor::block_on;
  use serde_json::json;
  use std::cell::Cell;

  // manual clock the tests can advance
  fn manual_clock() -> (Rc<Cell<i64>>, TtlCache) {
    let now = Rc::new(Cell::new(1_000));
    let handle = now.clone();
    let cache = TtlCache::with_clock(move || handle.get());
    (now, cache)
  }

  #[test]
  fn hit_within_ttl_returns_exact_payload() {
    let (_, cache) = manual_clock();
    cache.put("k", json!({"price": 42.5}));
    assert_eq!(cache.get("k", 60_000), Some(json!({"price": 42.5})));
  }

  #[test]
  fn miss_after_ttl_elapses() {
    let (now, cache) = manual_clock();
    cache.put("k", json!(1));
    now.set(now.get() + 59_999);
    assert!(cache.get("k", 60_000).is_some());
    now.set(now.get() + 1);
    assert_eq!(cache.get("k", 60_000), None);
  }

  #[test]
  fn miss_on_unknown_key() {
    let (_, cache) = manual_clock();
    assert_eq!(cache.get("never-stored", 60_000), None);
  }

  #[test]
  fn put_overwrites_and_restamps() {
    let (now, cache) = manual_clock();
    cache.put("k", json!("old"));
    now.set(now.get() + 100_000);
    cache.put("k", json!("new"));
    assert_eq!(cache.get("k", 60_000), Some(json!("new")));
  }

  #[test]
  fn fetch_cached_loads_once_within_ttl() {
    let (_, cache) = manual_clock();
    let calls = Rc::new(Cell::new(0u32));

    let load = |calls: Rc<Cell<u32>>| async move {
      calls.set(calls.get() + 1);
      Ok::<Vec<u64>, ApiError>(vec![1, 2, 3])
    };

    let first: Vec<u64> =
      block_on(fetch_cached(&cache, "markets:1:10", 60_000, || load(calls.clone()))).unwrap();
    let second: Vec<u64> =
      block_on(fetch_cached(&cache, "markets:1:10", 60_000, || load(calls.clone()))).unwrap();

    assert_eq!(calls.get(), 1, "second call must be served from cache");
    assert_eq!(first, second);
  }

  #[test]
  fn fetch_cached_reloads_after_expiry() {
    let (now, cache) = manual_clock();
    let calls = Rc::new(Cell::new(0u32));

    let load = |calls: Rc<Cell<u32>>| async move {
      calls.set(calls.get() + 1);
      Ok::<u64, ApiError>(7)
    };

    let _: u64 = block_on(fetch_cached(&cache, "k", 60_000, || load(calls.clone()))).unwrap();
    now.set(now.get() + 60_000);
    let _: u64 = block_on(fetch_cached(&cache, "k", 60_000, || load(calls.clone()))).unwrap();
    assert_eq!(calls.get(), 2);
  }

  #[test]
  fn failed_load_leaves_previous_entry_usable() {
    let (_, cache) = manual_clock();
    cache.put("k", json!(99));

    let result: Result<u64, ApiError> = block_on(fetch_cached(&cache, "k2", 60_000, || async {
      Err(ApiError::Network("down".into()))
    }));
    assert!(result.is_err());

    // the unrelated failure must not corrupt existing entries
    assert_eq!(cache.get("k", 60_000), Some(json!(99)));
    // and the failed key must not have been stored
    assert_eq!(cache.get("k2", 60_000), None);
  }
}
