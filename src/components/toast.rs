#![allow(non_snake_case)]

use dioxus::prelude::*;

// Toasts live in the DOM from mount; showing one is just a class flip so
// async handlers can trigger them without touching component state.

#[component]
pub fn ErrorToast(id: String, content: String) -> Element {
  rsx! {
    div {
      id: "{id}",
      class: "toast toast-error",
      "{content}"
    }
  }
}

#[component]
pub fn SuccessToast(id: String, content: String) -> Element {
  rsx! {
    div {
      id: "{id}",
      class: "toast toast-success",
      "{content}"
    }
  }
}

/// Shows the toast with a caller-supplied message, then hides it again
/// after a short delay.
pub fn show_toast_message(id: &str, message: &str) {
  let escaped = message.replace('\\', "\\\\").replace('"', "\\\"");
  document::eval(&format!(
    r#"
    var x = document.getElementById("{}");
    if (x) {{
      x.textContent = "{}";
      x.classList.add("show");
      setTimeout(function(){{x.classList.remove("show");}}, 2500);
    }}
    "#,
    id, escaped
  ));
}
