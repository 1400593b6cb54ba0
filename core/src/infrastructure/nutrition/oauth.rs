use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

type HmacSha1 = Hmac<Sha1>;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const OAUTH_VERSION: &str = "1.0";

/// RFC 3986 percent-encoding: only unreserved characters are kept.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// `METHOD&enc(url)&enc(k1=v1&k2=v2...)` with keys in lexical order.
pub fn signature_base_string(method: &str, url: &str, params: &BTreeMap<String, String>) -> String {
    let param_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&param_string)
    )
}

/// OAuth 1.0 HMAC-SHA1 signature for a two-legged request (no token secret).
pub fn sign_request(
    method: &str,
    url: &str,
    params: &BTreeMap<String, String>,
    consumer_secret: &str,
) -> Result<String, CoreError> {
    let base_string = signature_base_string(method, url, params);
    let signing_key = format!("{}&", percent_encode(consumer_secret));

    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes()).map_err(|e| {
        error!("Failed to initialise HMAC-SHA1: {}", e);
        CoreError::InternalServerError
    })?;
    mac.update(base_string.as_bytes());

    Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}
