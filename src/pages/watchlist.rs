use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::coins::CoinTabs;
use crate::components::guard::use_session_guard;
use crate::components::loader::Loader;
use crate::components::toast::{show_toast_message, ErrorToast};
use crate::utils::coindata::CoinSummary;
use crate::utils::fetcher::{GeckoOrder, MarketApi};
use crate::utils::storage;
use crate::Route;

#[component]
pub fn Watchlist() -> Element {
  static CSS: Asset = asset!("assets/watchlist.css");

  let session = use_session_guard();
  let api = use_context::<MarketApi>();
  let mut coins = use_signal(Vec::<CoinSummary>::new);
  let mut loading = use_signal(|| true);
  let starred = use_signal(storage::load_watchlist);

  use_future(move || {
    let api = api.clone();
    async move {
      match api.coin_markets(1, 100, GeckoOrder::MarketCapDesc).await {
        Ok(list) => coins.set(list),
        Err(err) => {
          warn!("watchlist market fetch failed: {err}");
          show_toast_message("watchlist-error", &err.user_message());
        }
      }
      loading.set(false);
    }
  });

  let picked: Vec<CoinSummary> = {
    let ids = starred();
    coins().into_iter().filter(|c| ids.contains(&c.id)).collect()
  };

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "watchlist-page",
      ErrorToast { id: "watchlist-error", content: "Could not load market data." },
      h1 { "Watchlist" }
      if session().is_none() {
        p { class: "watchlist-empty", "Sign in to see your watchlist." }
      } else if loading() {
        Loader { }
      } else if starred().is_empty() {
        div {
          class: "watchlist-empty",
          p { "No coins starred yet." }
          Link {
            class: "cta-button",
            to: Route::Dashboard { },
            "Browse the dashboard"
          }
        }
      } else if picked.is_empty() {
        p { class: "watchlist-empty", "Your starred coins are outside the current top 100." }
      } else {
        CoinTabs { coins: picked }
      }
    }
  }
}
