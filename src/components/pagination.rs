#![allow(non_snake_case)]

use dioxus::prelude::*;

pub const PAGE_SIZE: usize = 10;

pub fn page_count(total: usize) -> usize {
  total.div_ceil(PAGE_SIZE).max(1)
}

/// Slice of `items` shown on 1-based page `page`.
pub fn page_slice<T: Clone>(items: &[T], page: usize) -> Vec<T> {
  let start = page.saturating_sub(1) * PAGE_SIZE;
  items.iter().skip(start).take(PAGE_SIZE).cloned().collect()
}

#[component]
pub fn Pagination(page: Signal<usize>, total: usize) -> Element {
  let pages = page_count(total);

  rsx! {
    div {
      class: "pagination",
      button {
        class: "page-button",
        disabled: page() <= 1,
        onclick: move |_evt| {
          let prev = page().saturating_sub(1).max(1);
          page.set(prev);
        },
        "‹"
      }
      span { class: "page-status", "Page {page} of {pages}" }
      button {
        class: "page-button",
        disabled: page() >= pages,
        onclick: move |_evt| {
          if page() < pages {
            page.set(page() + 1);
          }
        },
        "›"
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn page_count_rounds_up() {
    assert_eq!(page_count(0), 1);
    assert_eq!(page_count(10), 1);
    assert_eq!(page_count(11), 2);
    assert_eq!(page_count(100), 10);
  }

  #[test]
  fn page_slice_windows_are_disjoint() {
    let items: Vec<usize> = (0..25).collect();
    assert_eq!(page_slice(&items, 1), (0..10).collect::<Vec<_>>());
    assert_eq!(page_slice(&items, 2), (10..20).collect::<Vec<_>>());
    assert_eq!(page_slice(&items, 3), (20..25).collect::<Vec<_>>());
    assert!(page_slice(&items, 4).is_empty());
  }
}
