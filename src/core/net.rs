// src/core/net.rs

// Single-attempt HTTP GET. No retries: a failed fetch fails the run.

use log::debug;
use reqwest::blocking::Client;

use crate::config::options::CollectOptions;
use crate::error::{Error, Result};

pub fn client(opts: &CollectOptions) -> Result<Client> {
    Client::builder()
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()
        .map_err(|e| Error::Network { url: opts.url.clone(), reason: e.to_string() })
}

pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let fail = |reason: String| Error::Network { url: s!(url), reason };

    let resp = client.get(url).send().map_err(|e| fail(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(fail(format!("HTTP {status}")));
    }
    let body = resp.text().map_err(|e| fail(e.to_string()))?;
    debug!("GET {url}: {status}, {} bytes", body.len());
    Ok(body)
}
