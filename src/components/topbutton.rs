#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Floating scroll-to-top button. Hidden until the page has scrolled past
/// the threshold; visibility is toggled by a scroll listener so the wasm
/// side never polls.
#[component]
pub fn TopButton() -> Element {
  rsx! {
    button {
      id: "top-button",
      class: "top-button",
      title: "Scroll to top",
      onmounted: move |_evt| {
        document::eval(
          r#"
          var btn = document.getElementById('top-button');
          if (btn) {
            window.addEventListener('scroll', function() {
              var top = window.pageYOffset || document.documentElement.scrollTop;
              if (top > 500) { btn.classList.add('show'); }
              else { btn.classList.remove('show'); }
            });
          }
          "#);
      },
      onclick: move |_evt| {
        document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
      },
      "↑"
    }
  }
}
