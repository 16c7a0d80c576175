use std::fmt;

/* App Errors */
// Classification of everything that can go wrong talking to the outside
// world. The fetcher never retries on its own: callers decide whether to
// show a retry affordance.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
  Network(String),
  NotFound(String),
  RateLimited(String),
  Validation(String),
  Unknown(String),
}

impl std::error::Error for ApiError {}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Network(msg) => write!(f, "Network error: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
      ApiError::Validation(msg) => write!(f, "Invalid input: {}", msg),
      ApiError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
    }
  }
}

impl ApiError {
  // Short user-facing message for toasts; Display keeps the detail.
  pub fn user_message(&self) -> String {
    match self {
      ApiError::Network(_) => "Could not reach the market data service. Check your connection.".to_string(),
      ApiError::NotFound(_) => "Sorry, couldn't find the coin you're looking for.".to_string(),
      ApiError::RateLimited(_) => "Too many requests. Please wait a moment and try again.".to_string(),
      ApiError::Validation(msg) => msg.clone(),
      ApiError::Unknown(_) => "Something went wrong. Please try again later.".to_string(),
    }
  }
}

pub fn classify_status(status: u16, body: &str) -> ApiError {
  match status {
    404 => ApiError::NotFound(format!("upstream returned 404: {}", body)),
    429 => ApiError::RateLimited(format!("upstream returned 429: {}", body)),
    s => ApiError::Unknown(format!("upstream returned {}: {}", s, body)),
  }
}

pub fn classify_transport(err: reqwest::Error) -> ApiError {
  if err.is_timeout() || err.is_connect() || err.is_request() {
    ApiError::Network(err.to_string())
  } else {
    ApiError::Unknown(err.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_classification() {
    assert!(matches!(classify_status(404, ""), ApiError::NotFound(_)));
    assert!(matches!(classify_status(429, ""), ApiError::RateLimited(_)));
    assert!(matches!(classify_status(500, ""), ApiError::Unknown(_)));
    assert!(matches!(classify_status(503, ""), ApiError::Unknown(_)));
  }

  #[test]
  fn user_messages_are_not_empty() {
    let errs = [
      ApiError::Network("x".into()),
      ApiError::NotFound("x".into()),
      ApiError::RateLimited("x".into()),
      ApiError::Validation("bad email".into()),
      ApiError::Unknown("x".into()),
    ];
    for e in errs {
      assert!(!e.user_message().is_empty());
    }
  }
}
