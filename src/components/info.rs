#![allow(non_snake_case)]

use dioxus::prelude::*;

const FOLD_CHARS: usize = 300;

// CoinGecko descriptions embed anchor tags; keep the text, drop the markup.
fn strip_tags(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut in_tag = false;
  for ch in input.chars() {
    match ch {
      '<' => in_tag = true,
      '>' => in_tag = false,
      c if !in_tag => out.push(c),
      _ => {}
    }
  }
  out
}

fn fold_point(text: &str) -> Option<usize> {
  if text.chars().count() <= FOLD_CHARS {
    return None;
  }
  Some(text.char_indices().nth(FOLD_CHARS).map(|(i, _)| i).unwrap_or(text.len()))
}

/// Coin title plus description, folded behind a read-more toggle when long.
#[component]
pub fn Info(title: String, description: String) -> Element {
  let mut expanded = use_signal(|| false);
  let text = strip_tags(&description);
  let fold = fold_point(&text);

  let shown = match (fold, expanded()) {
    (Some(at), false) => format!("{}...", &text[..at]),
    _ => text.clone(),
  };

  rsx! {
    div {
      class: "coin-info",
      h2 { "{title}" }
      if text.is_empty() {
        p { class: "info-empty", "No description available." }
      } else {
        p { class: "info-text", "{shown}" }
        if fold.is_some() {
          button {
            class: "info-toggle",
            onclick: move |_evt| expanded.set(!expanded()),
            if expanded() { "Read less" } else { "Read more" }
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strip_tags_drops_markup_keeps_text() {
    assert_eq!(strip_tags("Bitcoin is <a href=\"x\">digital</a> money."), "Bitcoin is digital money.");
    assert_eq!(strip_tags("plain text"), "plain text");
  }

  #[test]
  fn fold_point_only_for_long_text() {
    assert_eq!(fold_point("short"), None);
    let long = "a".repeat(FOLD_CHARS + 50);
    assert_eq!(fold_point(&long), Some(FOLD_CHARS));
  }
}
