use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
  static CSS: Asset = asset!("assets/about.css");
  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "about-page",
      section {
        class: "hero",
        h1 { "About CryptoTracker" },
        p { "CryptoTracker grew out of a simple need: one place to watch prices, compare assets and keep a shortlist without wading through exchange dashboards. All market data comes live from CoinGecko; nothing is resold, repackaged or delayed." }
      },
      section {
        class: "about-stats",
        div {
          class: "stat-card",
          p { class: "stat-value", "25,000+" }
          p { class: "stat-label", "Active users" }
        },
        div {
          class: "stat-card",
          p { class: "stat-value", "50+" }
          p { class: "stat-label", "Markets covered" }
        },
        div {
          class: "stat-card",
          p { class: "stat-value", "7" }
          p { class: "stat-label", "Years of market data" }
        }
      },
      section {
        class: "features",
        div {
          class: "feature-card",
          h3 { class: "feature-card-title", "What we track" }
          p { "The top cryptocurrencies by market cap, with prices, 24h moves, volumes and up to a year of history for every asset." }
        },
        div {
          class: "feature-card",
          h3 { class: "feature-card-title", "What we don't do" }
          p { "No trading, no custody, no advice. CryptoTracker is an information tool; the numbers speak for themselves." }
        },
        div {
          class: "feature-card",
          h3 { class: "feature-card-title", "Your data" }
          p { "Your watchlist and theme live in your browser. An account is only needed to unlock the data pages, nothing is tracked across devices." }
        }
      },
      section {
        class: "about-cta",
        p { "Ready to have a look around?" }
        Link {
          class: "cta-button",
          to: Route::Register { },
          "Create a free account"
        }
      }
    }
  }
}
