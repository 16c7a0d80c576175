#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Controlled search box. Debouncing happens in the page that owns the
/// `query` signal, not here.
#[component]
pub fn SearchBar(query: Signal<String>) -> Element {
  rsx! {
    div {
      class: "search-bar",
      input {
        r#type: "text",
        placeholder: "Search by name or symbol...",
        value: "{query}",
        oninput: move |evt| query.set(evt.value()),
      }
      if !query().is_empty() {
        button {
          class: "search-clear",
          onclick: move |_evt| query.set(String::new()),
          "✕"
        }
      }
    }
  }
}
