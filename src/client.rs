//! Vidgate HTTP client for control-plane REST calls.

use base64::Engine;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::error::VidgateError;
use crate::session::Session;
use crate::types::SessionProperties;

/// Entry point for the Vidgate control-plane API.
///
/// Holds the server coordinates and the pre-encoded credential, and hands
/// out [`Session`] handles scoped to them.
pub struct Vidgate {
  link: ApiLink,
}

impl Vidgate {
  /// Create a client for `hostname:port` over HTTPS.
  ///
  /// `credential` is sent verbatim as the `Authorization` header on every
  /// request; see [`basic_credential`] for the usual HTTP Basic form.
  /// Requests carry no timeout: once issued they run until the transport
  /// reports completion or error.
  pub fn new(hostname: impl Into<String>, port: u16, credential: impl Into<String>) -> Self {
    Self::build("https", hostname.into(), port, credential.into(), None)
  }

  /// Plain-HTTP variant for local development servers.
  pub fn insecure(hostname: impl Into<String>, port: u16, credential: impl Into<String>) -> Self {
    Self::build("http", hostname.into(), port, credential.into(), None)
  }

  /// Like [`Vidgate::new`], but aborts any request that exceeds `timeout`.
  pub fn with_request_timeout(
    hostname: impl Into<String>,
    port: u16,
    credential: impl Into<String>,
    timeout: Duration,
  ) -> Self {
    Self::build("https", hostname.into(), port, credential.into(), Some(timeout))
  }

  fn build(
    scheme: &str,
    hostname: String,
    port: u16,
    credential: String,
    timeout: Option<Duration>,
  ) -> Self {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
      builder = builder.timeout(timeout);
    }
    Self {
      link: ApiLink {
        http: builder.build().expect("Failed to create HTTP client"),
        base_url: format!("{}://{}:{}", scheme, hostname, port),
        credential,
      },
    }
  }

  /// Create a session handle with the given creation properties.
  ///
  /// No request is issued here; the session is provisioned on the server
  /// the first time [`Session::session_id`] is called.
  pub fn create_session(&self, properties: SessionProperties) -> Session {
    Session::new(self.link.clone(), properties)
  }
}

/// Build an HTTP Basic `Authorization` value from an API user and secret.
pub fn basic_credential(user: &str, secret: &str) -> String {
  let encoded = base64::prelude::BASE64_STANDARD.encode(format!("{}:{}", user, secret));
  format!("Basic {}", encoded)
}

/// Shared request executor: serialize a JSON body, POST it, collect the
/// response, dispatch on status, deserialize on 200.
#[derive(Clone)]
pub(crate) struct ApiLink {
  http: Client,
  base_url: String,
  credential: String,
}

impl ApiLink {
  /// Issue a JSON POST against `path`.
  ///
  /// The `Content-Length` header is the byte length of the serialized
  /// body, which diverges from the character count for multi-byte
  /// payloads. Success means status 200 exactly; any other status fails
  /// with [`VidgateError::Rejected`] without reading the body.
  pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
    &self,
    path: &str,
    body: &B,
  ) -> Result<T, VidgateError> {
    let url = format!("{}{}", self.base_url, path);
    let payload = serde_json::to_vec(body)?;

    log::debug!("POST {} ({} bytes)", path, payload.len());

    let response = self
      .http
      .post(&url)
      .header(header::AUTHORIZATION, self.credential.as_str())
      .header(header::CONTENT_TYPE, "application/json")
      .header(header::CONTENT_LENGTH, payload.len())
      .body(payload)
      .send()
      .await?;

    let status = response.status();
    if status.as_u16() != 200 {
      log::error!("POST {} rejected with status {}", path, status);
      return Err(VidgateError::Rejected(status.as_u16()));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
  }
}
