//! Session handle - lazy provisioning and per-participant token minting.

use parking_lot::RwLock;

use crate::client::ApiLink;
use crate::error::VidgateError;
use crate::types::{CreatedResource, SessionProperties, TokenOptions, TokenRequest};

/// A videoconferencing session on the Vidgate server.
///
/// The handle starts without a server-side identifier; the first
/// [`session_id`](Session::session_id) call provisions one and caches it
/// for the lifetime of the handle. Tokens are minted fresh on every
/// [`generate_token`](Session::generate_token) call.
pub struct Session {
  link: ApiLink,
  properties: SessionProperties,
  /// Assigned by completed provisioning responses; nothing else writes it.
  session_id: RwLock<Option<String>>,
}

impl Session {
  pub(crate) fn new(link: ApiLink, properties: SessionProperties) -> Self {
    Self {
      link,
      properties,
      session_id: RwLock::new(None),
    }
  }

  /// The creation properties this handle was built with.
  pub fn properties(&self) -> &SessionProperties {
    &self.properties
  }

  /// The cached identifier, if provisioning has completed.
  pub fn current_id(&self) -> Option<String> {
    self.session_id.read().clone()
  }

  /// Return the session identifier, provisioning it on the server on
  /// first use.
  ///
  /// Once an identifier is cached this returns it without any network
  /// traffic. Until then every call issues its own creation request:
  /// concurrent callers are not deduplicated, each resolves with the
  /// identifier its own response carried, and the cache keeps the one
  /// whose response completed last.
  pub async fn session_id(&self) -> Result<String, VidgateError> {
    if let Some(id) = self.session_id.read().clone() {
      return Ok(id);
    }

    let created: CreatedResource = self.link.post("/api/sessions", &self.properties).await?;

    log::debug!("session provisioned: {}", created.id);
    *self.session_id.write() = Some(created.id.clone());
    Ok(created.id)
  }

  /// Mint a new access token scoped to this session.
  ///
  /// Always issues a fresh request; nothing is cached. The session
  /// identifier is not validated locally: if the session has not been
  /// provisioned the `session` field is left out of the request body and
  /// the server's rejection surfaces as [`VidgateError::Rejected`].
  pub async fn generate_token(&self, options: TokenOptions) -> Result<String, VidgateError> {
    let request = TokenRequest {
      session: self.current_id(),
      role: options.role,
      data: options.data,
    };

    let created: CreatedResource = self.link.post("/api/tokens", &request).await?;
    Ok(created.id)
  }
}
