//! Share token codec
//!
//! Serializes a form snapshot into a transport-safe base64 token and back.
//! Tokens carry no brand field; decoding re-forces the fixed signature.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::brief::{ContentDescription, StyleConfig};

/// Share codec errors
#[derive(Debug, Clone, Error)]
pub enum ShareError {
    #[error("Failed to encode share token: {0}")]
    EncodeError(String),

    #[error("Invalid share token: {0}")]
    DecodeError(String),
}

/// Snapshot carried by a share token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharePayload {
    pub description: ContentDescription,
    pub style: StyleConfig,
    /// Optional template label shown to the receiver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Encode a snapshot as a URL-safe base64 token
pub fn encode(payload: &SharePayload) -> Result<String, ShareError> {
    let json = serde_json::to_vec(payload).map_err(|e| ShareError::EncodeError(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a token back into a snapshot. The embedded description is
/// sanitized so a tampered token can never change the brand signature.
pub fn decode(token: &str) -> Result<SharePayload, ShareError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|e| ShareError::DecodeError(e.to_string()))?;
    let mut payload: SharePayload =
        serde_json::from_slice(&bytes).map_err(|e| ShareError::DecodeError(e.to_string()))?;
    payload.description.sanitize();
    Ok(payload)
}
