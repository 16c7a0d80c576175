#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::toast::SuccessToast;
use crate::components::topbutton::TopButton;
use crate::utils::storage::{self, Theme};
use crate::{AuthState, Route, ThemeState};

/// Toast id for watchlist add/remove notices; lives in the layout so the
/// star buttons can fire it from any page.
pub const WATCHLIST_TOAST_ID: &str = "watchlist-toast";

#[component]
pub fn Template() -> Element {
  static CSS: Asset = asset!("assets/template.css");

  rsx! {
    document::Stylesheet { href: CSS },
    Header { }
    Outlet::<Route> {}
    SuccessToast { id: WATCHLIST_TOAST_ID.to_string(), content: "" }
    TopButton { }
    Footer { }
  }
}

#[component]
fn Header() -> Element {
  let theme_state = use_context::<ThemeState>();
  let mut theme = theme_state.theme;
  let auth = use_context::<AuthState>();
  let mut session = auth.session;
  let nav = use_navigator();

  rsx! {
    nav {
      div {
        class: "nav-container",
        Link {
          class: "logo",
          active_class: "nav-active",
          to: Route::Home { },
          span { class: "logo-mark", "₿" }
          "CryptoTracker"
        }
        div {
          class: "nav-links",
          Link {
            active_class: "nav-active",
            to: Route::Dashboard { },
            "Dashboard"
          },
          Link {
            active_class: "nav-active",
            to: Route::Compare { },
            "Compare"
          },
          Link {
            active_class: "nav-active",
            to: Route::Watchlist { },
            "Watchlist"
          },
          button {
            class: "theme-toggle",
            title: "Toggle light/dark theme",
            onclick: move |_evt| {
              let next = theme().toggled();
              theme.set(next);
            },
            if theme() == Theme::Dark { "☀" } else { "☾" }
          },
          if session().is_some() {
            button {
              class: "auth-button",
              onclick: move |_evt| {
                storage::clear_session();
                session.set(None);
                nav.push(Route::Home { });
              },
              "Log out"
            }
          } else {
            Link {
              class: "auth-button",
              to: Route::Login { },
              "Sign in"
            }
          }
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  rsx! {
    footer {
      div {
        class: "footer-container",
        div {
          class: "copyright",
          p { "© 2025 CryptoTracker" }
        },
        div {
          class: "footer-links",
          Link { to: Route::About { }, "About" },
          Link { to: Route::Contact { }, "Contact" }
        },
        div {
          class: "footer-note",
          p { "Market data by CoinGecko" }
        }
      }
    }
  }
}
