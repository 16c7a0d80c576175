#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::template::WATCHLIST_TOAST_ID;
use crate::components::toast::show_toast_message;
use crate::utils::coindata::{format_pct, format_usd, format_usd_compact, CoinSummary};
use crate::utils::storage;
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinView {
  Grid,
  List,
}

/// Grid/list tab switcher over a page of coins, as on the dashboard and
/// watchlist pages.
#[component]
pub fn CoinTabs(coins: Vec<CoinSummary>) -> Element {
  let mut view = use_signal(|| CoinView::Grid);

  rsx! {
    div {
      class: "coin-tabs",
      div {
        class: "tab-buttons",
        button {
          class: if view() == CoinView::Grid { "tab-button tab-active" } else { "tab-button" },
          onclick: move |_evt| view.set(CoinView::Grid),
          "Grid"
        },
        button {
          class: if view() == CoinView::List { "tab-button tab-active" } else { "tab-button" },
          onclick: move |_evt| view.set(CoinView::List),
          "List"
        }
      },
      if view() == CoinView::Grid {
        div {
          class: "coin-grid",
          for coin in coins.iter() {
            CoinTile { key: "tile-{coin.id}", coin: coin.clone() }
          }
        }
      } else {
        table {
          class: "coin-table",
          tbody {
            tr {
              th { scope: "col", "" },
              th { scope: "col", "Coin" },
              th { scope: "col", "Price" },
              th { scope: "col", "24h" },
              th { scope: "col", "Volume" },
              th { scope: "col", "Market Cap" },
              th { scope: "col", "" },
            }
            for coin in coins.iter() {
              CoinRow { key: "row-{coin.id}", coin: coin.clone() }
            }
          }
        }
      }
    }
  }
}

#[component]
pub fn CoinTile(coin: CoinSummary) -> Element {
  let gaining = coin.price_change_percentage_24h.unwrap_or(0.0) >= 0.0;
  let trend = if gaining { "trend-up" } else { "trend-down" };

  rsx! {
    div {
      class: "coin-tile {trend}",
      Link {
        class: "coin-tile-link",
        to: Route::Coin { id: coin.id.clone() },
        div {
          class: "coin-tile-head",
          img { class: "coin-icon", src: "{coin.image}", alt: "{coin.name}" }
          div {
            class: "coin-names",
            p { class: "coin-symbol", "{coin.symbol.to_uppercase()}" }
            p { class: "coin-name", "{coin.name}" }
          }
        }
        div {
          class: "coin-tile-price",
          span { class: "coin-change {trend}", {format_pct(coin.price_change_percentage_24h)} }
          p { class: "coin-price", {format_usd(coin.current_price)} }
        }
        div {
          class: "coin-tile-stats",
          p { "Market Cap: " {format_usd_compact(coin.market_cap)} }
          p { "Volume: " {format_usd_compact(coin.total_volume)} }
        }
      }
      WatchStar { id: coin.id.clone(), name: coin.name.clone() }
    }
  }
}

#[component]
pub fn CoinRow(coin: CoinSummary) -> Element {
  let gaining = coin.price_change_percentage_24h.unwrap_or(0.0) >= 0.0;
  let trend = if gaining { "trend-up" } else { "trend-down" };
  let rank = coin.market_cap_rank.map(|r| r.to_string()).unwrap_or_else(|| "—".to_string());

  rsx! {
    tr {
      class: "coin-row",
      td { class: "coin-rank", "{rank}" }
      td {
        Link {
          class: "coin-row-identity",
          to: Route::Coin { id: coin.id.clone() },
          img { class: "coin-icon", src: "{coin.image}", alt: "{coin.name}" }
          div {
            class: "coin-names",
            p { class: "coin-symbol", "{coin.symbol.to_uppercase()}" }
            p { class: "coin-name", "{coin.name}" }
          }
        }
      }
      td { class: "coin-price", {format_usd(coin.current_price)} }
      td { class: "coin-change {trend}", {format_pct(coin.price_change_percentage_24h)} }
      td { class: "coin-volume", {format_usd_compact(coin.total_volume)} }
      td { class: "coin-mcap", {format_usd_compact(coin.market_cap)} }
      td { WatchStar { id: coin.id.clone(), name: coin.name.clone() } }
    }
  }
}

/// Star toggle persisting the coin id to the stored watchlist.
#[component]
pub fn WatchStar(id: String, name: String) -> Element {
  let mut starred = use_signal(|| storage::watchlist_contains(&id));
  let star_name = name.clone();

  rsx! {
    button {
      class: if starred() { "watch-star starred" } else { "watch-star" },
      title: if starred() { "Remove {name} from watchlist" } else { "Add {name} to watchlist" },
      onclick: move |evt| {
        evt.stop_propagation();
        let now_starred = storage::toggle_watchlist(&id);
        starred.set(now_starred);
        let notice = if now_starred {
          format!("{} added to watchlist", star_name)
        } else {
          format!("{} removed from watchlist", star_name)
        };
        show_toast_message(WATCHLIST_TOAST_ID, &notice);
      },
      if starred() { "★" } else { "☆" }
    }
  }
}
