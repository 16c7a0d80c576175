use dioxus::logger::tracing::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::auth::AuthSession;

const WATCHLIST_KEY: &str = "watchlist";
const THEME_KEY: &str = "theme";
const SESSION_KEY: &str = "auth_session";

/// Durable client-side key-value store backed by browser localStorage.
/// Values are JSON strings; read at page load, written on every mutation.
/// Storage being unavailable (private mode quota, disabled) degrades to
/// in-memory-only behavior rather than failing the page.
fn local_storage() -> Option<web_sys::Storage> {
  web_sys::window()?.local_storage().ok().flatten()
}

fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
  let raw = local_storage()?.get_item(key).ok().flatten()?;
  match serde_json::from_str(&raw) {
    Ok(value) => Some(value),
    Err(e) => {
      warn!("discarding malformed \"{}\" entry in localStorage: {}", key, e);
      None
    }
  }
}

fn set_json<T: Serialize>(key: &str, value: &T) {
  let Some(storage) = local_storage() else { return };
  if let Ok(raw) = serde_json::to_string(value) {
    let _ = storage.set_item(key, &raw);
  }
}

fn remove(key: &str) {
  if let Some(storage) = local_storage() {
    let _ = storage.remove_item(key);
  }
}

/* Watchlist: a set of coin ids, no server sync */

pub fn load_watchlist() -> Vec<String> {
  get_json(WATCHLIST_KEY).unwrap_or_default()
}

pub fn watchlist_contains(id: &str) -> bool {
  load_watchlist().iter().any(|w| w == id)
}

/// Adds the id if absent, removes it if present; returns whether the coin
/// is on the list afterwards.
pub fn toggle_watchlist(id: &str) -> bool {
  let mut watchlist = load_watchlist();
  let added = if let Some(pos) = watchlist.iter().position(|w| w == id) {
    watchlist.remove(pos);
    false
  } else {
    watchlist.push(id.to_string());
    true
  };
  set_json(WATCHLIST_KEY, &watchlist);
  added
}

/* Theme preference */

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  Light,
  Dark,
}

impl Theme {
  pub fn attr(&self) -> &'static str {
    match self {
      Theme::Light => "light",
      Theme::Dark => "dark",
    }
  }

  pub fn toggled(&self) -> Theme {
    match self {
      Theme::Light => Theme::Dark,
      Theme::Dark => Theme::Light,
    }
  }
}

pub fn load_theme() -> Theme {
  get_json(THEME_KEY).unwrap_or(Theme::Dark)
}

pub fn save_theme(theme: Theme) {
  set_json(THEME_KEY, &theme);
}

/* Auth session */

pub fn load_session() -> Option<AuthSession> {
  get_json(SESSION_KEY)
}

pub fn save_session(session: &AuthSession) {
  set_json(SESSION_KEY, session);
}

pub fn clear_session() {
  remove(SESSION_KEY);
}
