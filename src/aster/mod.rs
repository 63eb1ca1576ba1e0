//! Aster Exchange Relay
//!
//! Public market data is forwarded as-is. Authenticated endpoints get a
//! `timestamp`, a `recvWindow` and an HMAC-SHA256 `signature` appended, plus
//! the `X-MBX-APIKEY` header.
//!
//! # Components
//!
//! - [`client`] - HTTP forwarding for public and signed GET requests
//! - [`signer`] - Query string construction and HMAC-SHA256 signing
//!
//! # Environment Variables
//!
//! - `ASTER_API_KEY` - API key sent in `X-MBX-APIKEY`
//! - `ASTER_SECRET` - Secret used to sign requests
//! - `ASTER_BASE_URL` (optional) - Defaults to `https://fapi.asterdex.com`

pub mod client;
pub mod signer;

pub use client::AsterClient;
pub use signer::{AsterCredentials, SignedQuery, RECV_WINDOW_MS};
