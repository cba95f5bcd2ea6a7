//! HTTP utilities for Puppy Bowl API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// Headers sent with every request.
pub fn default_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let agent = format!("puppy-bowl/{}", env!("CARGO_PKG_VERSION"));
    h.insert(
        USER_AGENT,
        HeaderValue::from_str(&agent).map_err(|_| crate::PuppyBowlError::InvalidConfig {
            name: "user-agent".to_string(),
        })?,
    );
    Ok(h)
}
