//! Shareable links: the bundle JSON as URL-safe base64 in a `state` query param.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine as _;
use thiserror::Error;

use crate::session::bundle::ExportBundle;

pub const SHARE_PATH: &str = "/api/v1/share";

#[derive(Debug, Error)]
pub enum ShareLinkError {
    #[error("share state is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("share state is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("share state is not a valid session: {0}")]
    Json(#[from] serde_json::Error),
}

/// Padded URL-safe base64 of the compact bundle JSON.
pub fn encode_share_state(bundle: &ExportBundle) -> Result<String, ShareLinkError> {
    let json = serde_json::to_string(bundle)?;
    Ok(URL_SAFE.encode(json.as_bytes()))
}

pub fn share_url(bundle: &ExportBundle) -> Result<String, ShareLinkError> {
    Ok(format!("{SHARE_PATH}?state={}", encode_share_state(bundle)?))
}

/// Accepts padded or unpadded input. Missing bundle keys take defaults.
pub fn decode_share_state(state: &str) -> Result<ExportBundle, ShareLinkError> {
    let state = state.trim();
    let raw = match URL_SAFE.decode(state) {
        Ok(raw) => raw,
        Err(_) => URL_SAFE_NO_PAD.decode(state.trim_end_matches('='))?,
    };
    let json = String::from_utf8(raw)?;
    Ok(serde_json::from_str(&json)?)
}
