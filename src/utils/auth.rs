use serde::{Deserialize, Serialize};

use super::api::{classify_transport, ApiError};

// Firebase Identity Toolkit REST endpoints. The web API key is a public
// client key baked in at compile time (build.rs).
const IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const FIREBASE_API_KEY: &str = env!("FIREBASE_API_KEY");

const MIN_PASSWORD_LEN: usize = 6;

/// The slice of the identity payload the app actually cares about. Pages
/// only ever ask "is someone signed in"; nothing downstream depends on the
/// rest of the provider's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
  pub email: String,
  pub local_id: String,
  pub id_token: String,
}

#[derive(Debug, Deserialize)]
struct IdentityResponse {
  email: String,
  #[serde(rename = "localId")]
  local_id: String,
  #[serde(rename = "idToken")]
  id_token: String,
}

#[derive(Debug, Default, Deserialize)]
struct IdentityErrorBody {
  #[serde(default)]
  error: IdentityErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
struct IdentityErrorDetail {
  #[serde(default)]
  message: String,
}

/// Client-side validation run before any network call.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
  let email = email.trim();
  if email.is_empty() || !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
    return Err(ApiError::Validation("Please enter a valid email address.".to_string()));
  }
  if password.len() < MIN_PASSWORD_LEN {
    return Err(ApiError::Validation(format!(
      "Password must be at least {} characters long.",
      MIN_PASSWORD_LEN
    )));
  }
  Ok(())
}

#[derive(Clone, Default)]
pub struct AuthClient {
  client: reqwest::Client,
}

#[derive(Serialize)]
struct CredentialsRequest<'a> {
  email: &'a str,
  password: &'a str,
  #[serde(rename = "returnSecureToken")]
  return_secure_token: bool,
}

impl AuthClient {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
    self.credentials_call("accounts:signUp", email, password).await
  }

  pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
    self.credentials_call("accounts:signInWithPassword", email, password).await
  }

  async fn credentials_call(
    &self,
    action: &str,
    email: &str,
    password: &str,
  ) -> Result<AuthSession, ApiError> {
    validate_credentials(email, password)?;

    let url = format!("{}/{}?key={}", IDENTITY_BASE_URL, action, FIREBASE_API_KEY);
    let body = CredentialsRequest { email: email.trim(), password, return_secure_token: true };

    let resp = self
      .client
      .post(&url)
      .json(&body)
      .send()
      .await
      .map_err(classify_transport)?;

    if !resp.status().is_success() {
      let err_body: IdentityErrorBody = resp.json().await.unwrap_or_default();
      return Err(map_identity_error(&err_body.error.message));
    }

    let identity: IdentityResponse = resp
      .json()
      .await
      .map_err(|e| ApiError::Unknown(format!("failed to decode identity response: {}", e)))?;

    Ok(AuthSession {
      email: identity.email,
      local_id: identity.local_id,
      id_token: identity.id_token,
    })
  }
}

/// Translates the identity backend's error codes into user-addressable
/// validation errors where possible.
fn map_identity_error(code: &str) -> ApiError {
  match code {
    "EMAIL_EXISTS" => ApiError::Validation("An account with this email already exists.".to_string()),
    "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
      ApiError::Validation("Incorrect email or password.".to_string())
    }
    "USER_DISABLED" => ApiError::Validation("This account has been disabled.".to_string()),
    code if code.starts_with("TOO_MANY_ATTEMPTS") => {
      ApiError::RateLimited("too many sign-in attempts".to_string())
    }
    other => ApiError::Unknown(format!("identity backend returned: {}", other)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_malformed_email() {
    assert!(matches!(validate_credentials("", "secret123"), Err(ApiError::Validation(_))));
    assert!(matches!(validate_credentials("not-an-email", "secret123"), Err(ApiError::Validation(_))));
    assert!(matches!(validate_credentials("@nouser.com", "secret123"), Err(ApiError::Validation(_))));
    assert!(matches!(validate_credentials("trailing@", "secret123"), Err(ApiError::Validation(_))));
  }

  #[test]
  fn rejects_short_password() {
    assert!(matches!(validate_credentials("a@b.com", "12345"), Err(ApiError::Validation(_))));
  }

  #[test]
  fn accepts_reasonable_credentials() {
    assert!(validate_credentials("user@example.com", "secret123").is_ok());
    assert!(validate_credentials("  user@example.com  ", "secret123").is_ok());
  }

  #[test]
  fn identity_error_mapping() {
    assert!(matches!(map_identity_error("EMAIL_EXISTS"), ApiError::Validation(_)));
    assert!(matches!(map_identity_error("INVALID_LOGIN_CREDENTIALS"), ApiError::Validation(_)));
    assert!(matches!(
      map_identity_error("TOO_MANY_ATTEMPTS_TRY_LATER"),
      ApiError::RateLimited(_)
    ));
    assert!(matches!(map_identity_error("WEIRD_NEW_CODE"), ApiError::Unknown(_)));
  }
}
