//! Control-plane REST client for the Vidgate videoconferencing media
//! server.
//!
//! Provisions sessions and mints per-participant access tokens over
//! HTTPS/JSON. Strictly control plane: no media transport lives here, and
//! no retry or recovery either - every failure propagates to the caller.
//!
//! ```no_run
//! use vidgate_client::{basic_credential, SessionProperties, TokenOptions, Vidgate};
//!
//! # async fn demo() -> Result<(), vidgate_client::VidgateError> {
//! let vidgate = Vidgate::new("media.example.com", 8443, basic_credential("VIDGATEAPP", "secret"));
//! let session = vidgate.create_session(SessionProperties::default());
//!
//! let id = session.session_id().await?;
//! let token = session.generate_token(TokenOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod session;
mod types;

pub use client::{basic_credential, Vidgate};
pub use error::VidgateError;
pub use session::Session;
pub use types::{MediaMode, RecordingLayout, RecordingMode, Role, SessionProperties, TokenOptions};
