use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::guard::use_guest_guard;
use crate::components::toast::{show_toast_message, ErrorToast};
use crate::utils::api::ApiError;
use crate::utils::auth::AuthClient;
use crate::utils::storage;
use crate::{AuthState, Route};

fn form_value(evt: &FormEvent, field: &str) -> String {
  evt.values().get(field).map(|v| v.as_value()).unwrap_or_default()
}

#[component]
pub fn Register() -> Element {
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
      ErrorToast { id: "register-error", content: "Registration failed." },
      div {
        class: "auth-card",
        h1 { "Create account" }
        form {
          onsubmit: move |evt| {
            let email = form_value(&evt, "email");
            let password = form_value(&evt, "password");
            let confirm = form_value(&evt, "confirm");
            if password != confirm {
              let err = ApiError::Validation("Passwords do not match.".to_string());
              show_toast_message("register-error", &err.user_message());
              return;
            }
            let mut session = auth.session;
            busy.set(true);
            spawn(async move {
              match AuthClient::new().sign_up(&email, &password).await {
                Ok(signed_up) => {
                  storage::save_session(&signed_up);
                  session.set(Some(signed_up));
                  nav.push(Route::Dashboard { });
                }
                Err(err) => {
                  warn!("sign up failed: {err}");
                  show_toast_message("register-error", &err.user_message());
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
            placeholder: "At least 6 characters",
            required: true,
          }
          label { r#for: "confirm", "Confirm password" }
          input {
            id: "confirm",
            name: "confirm",
            r#type: "password",
            required: true,
          }
          button {
            class: "auth-submit",
            r#type: "submit",
            disabled: busy(),
            if busy() { "Creating account..." } else { "Create account" }
          }
        }
        p {
          class: "auth-switch",
          "Already have an account? "
          Link { to: Route::Login { }, "Sign in" }
        }
      }
    }
  }
}
