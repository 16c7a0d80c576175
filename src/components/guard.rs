use dioxus::prelude::*;

use crate::utils::auth::AuthSession;
use crate::{AuthState, Route};

/// Where a visitor hitting a protected page gets sent, if anywhere.
pub fn protected_redirect(signed_in: bool) -> Option<Route> {
  (!signed_in).then(|| Route::Login {})
}

/// Where an already signed-in visitor on an auth page gets sent.
pub fn guest_redirect(signed_in: bool) -> Option<Route> {
  signed_in.then(|| Route::Dashboard {})
}

/// Sends signed-out visitors to the login page. Pages call this at the top
/// and fall back to a placeholder while the redirect lands; the returned
/// signal is the session they gate on.
pub fn use_session_guard() -> Signal<Option<AuthSession>> {
  let auth = use_context::<AuthState>();
  let session = auth.session;
  let nav = use_navigator();

  use_effect(move || {
    if let Some(route) = protected_redirect(session().is_some()) {
      nav.push(route);
    }
  });

  session
}

/// Inverse guard for the login/register pages: an active session skips the
/// form and goes straight to the dashboard.
pub fn use_guest_guard() -> Signal<Option<AuthSession>> {
  let auth = use_context::<AuthState>();
  let session = auth.session;
  let nav = use_navigator();

  use_effect(move || {
    if let Some(route) = guest_redirect(session().is_some()) {
      nav.push(route);
    }
  });

  session
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn signed_out_visitors_are_sent_to_login() {
    assert_eq!(protected_redirect(false), Some(Route::Login {}));
    assert_eq!(protected_redirect(true), None);
  }

  #[test]
  fn signed_in_visitors_skip_the_auth_pages() {
    assert_eq!(guest_redirect(true), Some(Route::Dashboard {}));
    assert_eq!(guest_redirect(false), None);
  }
}
