//! HTTP transport module
//!
//! Provides the shared async HTTP client every API call goes through.
//!
//! # Features
//!
//! - **Base URL resolution**: endpoints are relative paths under the API root
//! - **Session cookie**: authenticated calls carry the captured session cookie
//! - **Throttling**: optional shared token bucket (governor)
//! - **Error payloads**: non-success responses are decoded into `RemoteApi` errors
//!
//! The client never retries. Retry policy belongs to the caller.

mod client;
mod rate_limit;

pub use client::{
    decode_json, set_cookie_values, HttpClient, HttpClientConfig, HttpClientConfigBuilder,
    RequestConfig, DEFAULT_BASE_URL,
};
pub use rate_limit::{RateLimiterConfig, Throttle};

#[cfg(test)]
mod tests;
