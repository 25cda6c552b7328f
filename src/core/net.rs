// src/core/net.rs
// Blocking HTTP GET. Called from worker threads only, never the UI thread.

use std::time::Duration;

use tracing::debug;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

fn client() -> Result<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Non-2xx statuses are errors.
pub fn http_get(url: &str) -> Result<String> {
    debug!("Net: GET {url}");
    let resp = client()?.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
    }
    Ok(resp.text()?)
}

