//! Vidgate API types.
//!
//! These types mirror the control-plane request and response bodies.

use serde::{Deserialize, Serialize};

/// How media streams travel between participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaMode {
  /// Streams are routed through the media server.
  #[default]
  Routed,
  /// Participants exchange streams directly, peer to peer.
  Relayed,
}

/// When the server starts recording a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordingMode {
  /// Recording starts only on an explicit API call.
  #[default]
  Manual,
  /// Recording starts as soon as the first participant publishes.
  Always,
}

/// Layout applied to composed session recordings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordingLayout {
  /// Tile all published streams to fill the canvas.
  #[default]
  BestFit,
  PictureInPicture,
  VerticalPresentation,
  HorizontalPresentation,
  /// Use the layout named by `default_custom_layout`.
  Custom,
}

/// What a token holder is allowed to do in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
  /// May only receive streams.
  Subscriber,
  /// May publish and receive streams.
  #[default]
  Publisher,
  /// May additionally force-unpublish and evict other participants.
  Moderator,
}

/// Creation properties for a session.
///
/// This is also the wire body of the session-creation request; unset
/// fields fall back to the server defaults via [`Default`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProperties {
  pub media_mode: MediaMode,
  pub recording_mode: RecordingMode,
  pub default_recording_layout: RecordingLayout,
  /// Name of a server-side custom layout, only meaningful with
  /// [`RecordingLayout::Custom`].
  pub default_custom_layout: String,
}

/// Per-token creation options.
///
/// Consumed once per [`generate_token`](crate::Session::generate_token)
/// call; never stored on the session handle.
#[derive(Debug, Clone, Default)]
pub struct TokenOptions {
  /// Permission level embedded in the token.
  pub role: Role,
  /// Opaque application payload carried by the token.
  pub data: String,
}

/// Wire body of the token-creation request.
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest {
  /// Omitted entirely when the session has not been provisioned; the
  /// server rejects such requests.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub session: Option<String>,
  pub role: Role,
  pub data: String,
}

/// Resource-creation response; both endpoints answer with an `id`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedResource {
  pub id: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_enum_wire_names() {
    assert_eq!(serde_json::to_string(&MediaMode::Routed).unwrap(), "\"ROUTED\"");
    assert_eq!(serde_json::to_string(&MediaMode::Relayed).unwrap(), "\"RELAYED\"");
    assert_eq!(serde_json::to_string(&RecordingMode::Manual).unwrap(), "\"MANUAL\"");
    assert_eq!(
      serde_json::to_string(&RecordingLayout::BestFit).unwrap(),
      "\"BEST_FIT\""
    );
    assert_eq!(
      serde_json::to_string(&RecordingLayout::PictureInPicture).unwrap(),
      "\"PICTURE_IN_PICTURE\""
    );
    assert_eq!(serde_json::to_string(&Role::Publisher).unwrap(), "\"PUBLISHER\"");
  }

  #[test]
  fn test_default_properties_body() {
    let body = serde_json::to_value(SessionProperties::default()).unwrap();
    assert_eq!(
      body,
      serde_json::json!({
        "mediaMode": "ROUTED",
        "recordingMode": "MANUAL",
        "defaultRecordingLayout": "BEST_FIT",
        "defaultCustomLayout": "",
      })
    );
  }

  #[test]
  fn test_token_request_omits_unset_session() {
    let request = TokenRequest {
      session: None,
      role: Role::default(),
      data: String::new(),
    };
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body, serde_json::json!({"role": "PUBLISHER", "data": ""}));
  }

  #[test]
  fn test_token_request_with_session() {
    let request = TokenRequest {
      session: Some("ses_42".to_string()),
      role: Role::Moderator,
      data: "user=alice".to_string(),
    };
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
      body,
      serde_json::json!({
        "session": "ses_42",
        "role": "MODERATOR",
        "data": "user=alice",
      })
    );
  }
}
