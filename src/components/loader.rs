#![allow(non_snake_case)]

use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
  rsx! {
    div {
      class: "loader-container",
      div { class: "loader-spinner" }
      p { class: "loader-text", "Loading market data..." }
    }
  }
}
