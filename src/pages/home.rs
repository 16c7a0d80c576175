use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("assets/home.css");
  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "home-page",
      section {
        class: "hero",
        h1 { "Track Crypto in Real Time" },
        p { "Live prices, market caps and trading volumes for the top 100 cryptocurrencies. Chart price history, compare assets side by side and keep a personal watchlist." },
        Link {
          class: "cta-button",
          to: Route::Dashboard { },
          "Open Dashboard"
        },
        Link {
          class: "cta-button cta-secondary",
          to: Route::Compare { },
          "Compare Coins"
        }
      },
      section {
        class: "features",
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"📈"}
            "Live Market Data"
          }
          p { "Browse the top coins ranked by market cap with prices, 24h changes and volumes refreshed straight from CoinGecko." }
        },
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"⚖"}
            "Side-by-Side Compare" }
          p { "Put any two assets on one chart with independent scales and see how prices, market caps or volumes moved against each other." }
        },
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"⭐"}
            "Personal Watchlist"
          }
          p { "Star the coins you care about and find them on a single page. Your list stays in the browser, no account required to build it." }
        }
      }
    }
  }
}
