use async_std::task::sleep;
use chrono::Local;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use std::time::Duration;

use crate::components::coins::CoinTabs;
use crate::components::guard::use_session_guard;
use crate::components::loader::Loader;
use crate::components::pagination::{page_slice, Pagination};
use crate::components::search::SearchBar;
use crate::components::toast::{show_toast_message, ErrorToast};
use crate::utils::coindata::CoinSummary;
use crate::utils::fetcher::{GeckoOrder, MarketApi, RequestSeq, DEBOUNCE_MS};

const MARKET_PAGE_SIZE: u32 = 100;
const POLL_INTERVAL_SECS: u64 = 120;

async fn load_markets(
  api: MarketApi,
  mut coins: Signal<Vec<CoinSummary>>,
  mut loading: Signal<bool>,
  mut failed: Signal<bool>,
  mut updated_at: Signal<Option<String>>,
) {
  loading.set(true);
  match api.coin_markets(1, MARKET_PAGE_SIZE, GeckoOrder::MarketCapDesc).await {
    Ok(list) => {
      coins.set(list);
      failed.set(false);
      updated_at.set(Some(Local::now().format("%H:%M:%S").to_string()));
    }
    Err(err) => {
      warn!("market list fetch failed: {err}");
      failed.set(true);
      show_toast_message("dashboard-error", &err.user_message());
    }
  }
  loading.set(false);
}

fn matches_query(coin: &CoinSummary, needle: &str) -> bool {
  coin.name.to_lowercase().contains(needle) || coin.symbol.to_lowercase().contains(needle)
}

#[component]
pub fn Dashboard() -> Element {
  static CSS: Asset = asset!("assets/dashboard.css");

  let session = use_session_guard();
  let api = use_context::<MarketApi>();
  let coins = use_signal(Vec::<CoinSummary>::new);
  let loading = use_signal(|| true);
  let failed = use_signal(|| false);
  let updated_at = use_signal(|| None::<String>);

  let query = use_signal(String::new);
  let mut applied_query = use_signal(String::new);
  let mut page = use_signal(|| 1usize);
  let search_seq = use_hook(RequestSeq::new);

  {
    let api = api.clone();
    use_future(move || {
      let api = api.clone();
      async move {
        load_markets(api.clone(), coins, loading, failed, updated_at).await;
        loop {
          sleep(Duration::from_secs(POLL_INTERVAL_SECS)).await;
          load_markets(api.clone(), coins, loading, failed, updated_at).await;
        }
      }
    });
  }

  // Typing only re-filters after the input has been quiet for the debounce
  // window; a newer keystroke invalidates the pending ticket.
  use_effect(move || {
    let typed = query();
    let ticket = search_seq.issue();
    let seq = search_seq.clone();
    spawn(async move {
      sleep(Duration::from_millis(DEBOUNCE_MS)).await;
      if seq.is_current(ticket) {
        applied_query.set(typed.to_lowercase());
        page.set(1);
      }
    });
  });

  if session().is_none() {
    return rsx! {
      document::Stylesheet {href: CSS},
      div {
        class: "fetch-failed",
        p { "Sign in to view the dashboard." }
      }
    };
  }

  let filtered: Vec<CoinSummary> = {
    let needle = applied_query();
    if needle.is_empty() {
      coins()
    } else {
      coins().into_iter().filter(|c| matches_query(c, &needle)).collect()
    }
  };
  let total = filtered.len();
  let visible = page_slice(&filtered, page());

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "dashboard-page",
      ErrorToast { id: "dashboard-error", content: "Could not load market data." },
      div {
        class: "dashboard-head",
        h1 { "Dashboard" }
        div {
          class: "dashboard-meta",
          if let Some(stamp) = updated_at() {
            span { class: "updated-at", "Updated {stamp}" }
          }
          button {
            class: "refresh-button",
            disabled: loading(),
            onclick: {
              let api = api.clone();
              move |_evt| {
                let api = api.clone();
                spawn(async move {
                  load_markets(api, coins, loading, failed, updated_at).await;
                });
              }
            },
            "Refresh"
          }
        }
      }
      SearchBar { query }
      if loading() && coins().is_empty() {
        Loader { }
      } else if failed() && coins().is_empty() {
        div {
          class: "fetch-failed",
          p { "Market data is unavailable right now." }
          button {
            class: "retry-button",
            onclick: {
              let api = api.clone();
              move |_evt| {
                let api = api.clone();
                spawn(async move {
                  load_markets(api, coins, loading, failed, updated_at).await;
                });
              }
            },
            "Try again"
          }
        }
      } else if total == 0 {
        p { class: "no-results", "No coins match \"{query}\"." }
      } else {
        CoinTabs { coins: visible }
        Pagination { page, total }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn coin(name: &str, symbol: &str) -> CoinSummary {
    CoinSummary {
      id: name.to_lowercase(),
      symbol: symbol.to_string(),
      name: name.to_string(),
      ..Default::default()
    }
  }

  #[test]
  fn query_matches_name_or_symbol_case_insensitively() {
    let btc = coin("Bitcoin", "btc");
    assert!(matches_query(&btc, "bit"));
    assert!(matches_query(&btc, "btc"));
    assert!(!matches_query(&btc, "eth"));
  }
}
