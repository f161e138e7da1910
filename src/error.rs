//! Error types for talking to the generative text service.
//!
//! A failed call is never fatal: the generator hands a [`ServiceError`] back to
//! the caller, which renders it in place of the commit message.

use std::fmt;

use thiserror::Error;

/// Broad category of a failed service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
  /// The request never got a response (DNS, TLS, connection reset, ...)
  Network,
  /// The API key was rejected
  Authentication,
  /// Rate limit or quota exhausted
  Quota,
  /// The service refused the request itself (bad model name, prompt too large)
  InvalidRequest,
  /// A response arrived but carried no usable text
  InvalidResponse,
  /// Any other non-success answer
  Api
}

impl fmt::Display for ServiceErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      ServiceErrorKind::Network => "network error",
      ServiceErrorKind::Authentication => "authentication failed",
      ServiceErrorKind::Quota => "quota exceeded",
      ServiceErrorKind::InvalidRequest => "invalid request",
      ServiceErrorKind::InvalidResponse => "invalid response",
      ServiceErrorKind::Api => "api error"
    };
    f.write_str(name)
  }
}

/// A failed call to the generative text service.
///
/// The display form is `<kind>: <message>`, which is what ends up after the
/// `Error:` prefix in the printed output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ServiceError {
  pub kind:    ServiceErrorKind,
  pub message: String
}

impl ServiceError {
  pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
    Self { kind, message: message.into() }
  }

  pub fn network(message: impl Into<String>) -> Self {
    Self::new(ServiceErrorKind::Network, message)
  }

  pub fn invalid_response(message: impl Into<String>) -> Self {
    Self::new(ServiceErrorKind::InvalidResponse, message)
  }

  /// Picks a kind from a bare HTTP status when the body could not be parsed.
  pub fn from_http_status(status: u16, message: impl Into<String>) -> Self {
    let kind = match status {
      401 | 403 => ServiceErrorKind::Authentication,
      429 => ServiceErrorKind::Quota,
      400 | 404 => ServiceErrorKind::InvalidRequest,
      _ => ServiceErrorKind::Api
    };
    Self::new(kind, message)
  }

  /// Picks a kind from the `status` string of a Google API error body.
  pub fn from_api_status(status: Option<&str>, code: u16, message: impl Into<String>) -> Self {
    match status {
      Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED") => Self::new(ServiceErrorKind::Authentication, message),
      Some("RESOURCE_EXHAUSTED") => Self::new(ServiceErrorKind::Quota, message),
      Some("INVALID_ARGUMENT") | Some("NOT_FOUND") | Some("FAILED_PRECONDITION") =>
        Self::new(ServiceErrorKind::InvalidRequest, message),
      _ => Self::from_http_status(code, message)
    }
  }
}

impl From<reqwest::Error> for ServiceError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_decode() {
      ServiceError::invalid_response(err.to_string())
    } else {
      ServiceError::network(err.to_string())
    }
  }
}
