//! Aster request signing
//!
//! Signed endpoints expect the query parameters plus `timestamp` and
//! `recvWindow`, sorted by key and joined as `key=value` pairs, followed by
//! `signature=<hex HMAC-SHA256 of everything before it>`.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeMap;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Receive window sent with every signed request, in milliseconds
pub const RECV_WINDOW_MS: u64 = 5000;

/// Aster API key and secret
#[derive(Clone, PartialEq, Eq)]
pub struct AsterCredentials {
    pub api_key: String,
    pub secret: String,
}

impl AsterCredentials {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    /// Build credentials only when both halves are present and non-empty
    pub fn from_parts(api_key: Option<String>, secret: Option<String>) -> Option<Self> {
        match (api_key, secret) {
            (Some(api_key), Some(secret)) if !api_key.is_empty() && !secret.is_empty() => {
                Some(Self { api_key, secret })
            }
            _ => None,
        }
    }
}

impl fmt::Debug for AsterCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsterCredentials")
            .field("api_key", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Query string ready to be appended to a signed endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedQuery {
    payload: String,
    signature: String,
}

impl SignedQuery {
    /// Sign `params` at the given timestamp.
    ///
    /// `timestamp` and `recvWindow` replace any caller-supplied values with
    /// the same keys.
    pub fn new<I>(params: I, secret: &str, timestamp_ms: i64) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut sorted: BTreeMap<String, String> = params.into_iter().collect();
        sorted.insert("timestamp".to_string(), timestamp_ms.to_string());
        sorted.insert("recvWindow".to_string(), RECV_WINDOW_MS.to_string());

        let payload = build_payload(&sorted);
        let signature = sign(secret, &payload);

        Self { payload, signature }
    }

    /// The exact string the signature was computed over
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Lowercase hex HMAC-SHA256 of the payload
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// `<payload>&signature=<hex>`
    pub fn to_query_string(&self) -> String {
        format!("{}&signature={}", self.payload, self.signature)
    }
}

/// Join already-sorted parameters as `k1=v1&k2=v2`, without percent-encoding
pub fn build_payload(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// HMAC-SHA256 of `payload` keyed with `secret`, hex encoded
pub fn sign(secret: &str, payload: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Current Unix time in milliseconds
pub fn timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
