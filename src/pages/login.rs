use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::guard::use_guest_guard;
use crate::components::toast::{show_toast_message, ErrorToast};
use crate::utils::auth::AuthClient;
use crate::utils::storage;
use crate::{AuthState, Route};

fn form_value(evt: &FormEvent, field: &str) -> String {
  evt.values().get(field).map(|v| v.as_value()).unwrap_or_default()
}

#[component]
pub fn Login() -> Element {
  static CSS: Asset = asset!("assets/auth.css");

  // an active session skips the form
  use_guest_guard();
  let auth = use_context::<AuthState>();
  let nav = use_navigator();
  let mut busy = use_signal(|| false);

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "auth-page",
      ErrorToast { id: "login-error", content: "Sign in failed." },
      div {
        class: "auth-card",
        h1 { "Sign in" }
        form {
          onsubmit: move |evt| {
            let email = form_value(&evt, "email");
            let password = form_value(&evt, "password");
            let mut session = auth.session;
            busy.set(true);
            spawn(async move {
              match AuthClient::new().sign_in(&email, &password).await {
                Ok(signed_in) => {
                  storage::save_session(&signed_in);
                  session.set(Some(signed_in));
                  nav.push(Route::Dashboard { });
                }
                Err(err) => {
                  warn!("sign in failed: {err}");
                  show_toast_message("login-error", &err.user_message());
                }
              }
              busy.set(false);
            });
          },
          label { r#for: "email", "Email" }
          input {
            id: "email",
            name: "email",
            r#type: "email",
            placeholder: "you@example.com",
            required: true,
          }
          label { r#for: "password", "Password" }
          input {
            id: "password",
            name: "password",
            r#type: "password",
            placeholder: "••••••••",
            required: true,
          }
          button {
            class: "auth-submit",
            r#type: "submit",
            disabled: busy(),
            if busy() { "Signing in..." } else { "Sign in" }
          }
        }
        p {
          class: "auth-switch",
          "New here? "
          Link { to: Route::Register { }, "Create an account" }
        }
      }
    }
  }
}
