//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to a Vidgate server.
#[derive(Debug, Error)]
pub enum VidgateError {
  /// The server answered with a non-200 status. Carries the status code
  /// only; the response body is left unread.
  #[error("server rejected request with status {0}")]
  Rejected(u16),

  /// The connection could not be established or failed mid-flight.
  #[error("transport failure: {0}")]
  Transport(#[from] reqwest::Error),

  /// A 200 response whose body is not the expected JSON, or a request
  /// body that failed to serialize.
  #[error("malformed JSON body: {0}")]
  Json(#[from] serde_json::Error),
}
