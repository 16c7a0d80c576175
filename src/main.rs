#![allow(non_snake_case)]
mod components;
mod pages;
mod utils;

use components::template::Template;
use dioxus::prelude::*;
use pages::{
  about::About, coin::Coin, compare::Compare, contact::Contact, dashboard::Dashboard,
  home::Home, login::Login, register::Register, watchlist::Watchlist,
};
use utils::auth::AuthSession;
use utils::fetcher::MarketApi;
use utils::storage::{self, Theme};

#[derive(Routable, PartialEq, Clone, Debug)]
enum Route {
  #[layout(Template)]
  #[route("/")]
  Home {},
  #[route("/dashboard")]
  Dashboard {},
  #[route("/coin/:id")]
  Coin { id: String },
  #[route("/compare")]
  Compare {},
  #[route("/watchlist")]
  Watchlist {},
  #[route("/about")]
  About {},
  #[route("/contact")]
  Contact {},
  #[route("/login")]
  Login {},
  #[route("/register")]
  Register {},
  #[route("/:..route")]
  PageNotFound { route: Vec<String> },
}

#[derive(Clone, Copy)]
pub struct ThemeState {
  pub theme: Signal<Theme>,
}

#[derive(Clone, Copy)]
pub struct AuthState {
  pub session: Signal<Option<AuthSession>>,
}

fn main() {
  dioxus::launch(App);
}

fn App() -> Element {
  use_context_provider(MarketApi::new);
  use_context_provider(|| AuthState { session: Signal::new(storage::load_session()) });
  let theme_state = use_context_provider(|| ThemeState { theme: Signal::new(storage::load_theme()) });

  // Theme changes persist and flip the attribute the stylesheets key off.
  use_effect(move || {
    let theme = (theme_state.theme)();
    storage::save_theme(theme);
    document::eval(&format!(
      r#"document.documentElement.setAttribute("data-theme", "{}");"#,
      theme.attr()
    ));
  });

  rsx! { Router::<Route> {} }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn static_pages_resolve_from_their_paths() {
    assert!(matches!("/about".parse::<Route>(), Ok(Route::About {})));
    assert!(matches!("/contact".parse::<Route>(), Ok(Route::Contact {})));
    assert!(matches!("/coin/bitcoin".parse::<Route>(), Ok(Route::Coin { id }) if id == "bitcoin"));
  }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
  rsx! {
    div {
      class: "not-found",
      h1 { "Page not found" }
      p { "The page you requested doesn't exist." }
      pre { color: "red", "attempted to navigate to: {route:?}" }
    }
  }
}
