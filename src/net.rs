// src/net.rs

// HTTPS GET with manual redirect following.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;

use crate::error::Error;
use crate::params::{FETCH_DEADLINE_SECS, MAX_REDIRECT_HOPS, USER_AGENT};

/// Fetch `url` and return the response body as text.
///
/// Redirects are followed by hand (client policy is `none`) so the hop
/// count stays bounded: after `MAX_REDIRECT_HOPS` redirects the fetch
/// fails with `RedirectLoop`. A single deadline covers the whole chain;
/// each hop gets whatever time is left of it.
pub fn fetch_text(url: &str) -> Result<String, Error> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .redirect(Policy::none())
        .build()
        .map_err(|e| Error::fetch(e.to_string()))?;

    let deadline = Instant::now() + Duration::from_secs(FETCH_DEADLINE_SECS);
    let mut target = reqwest::Url::parse(url)
        .map_err(|e| Error::fetch(format!("bad url {url}: {e}")))?;

    // One extra iteration so the last allowed hop still gets its response.
    for hop in 0..=MAX_REDIRECT_HOPS {
        let remaining = deadline
            .checked_duration_since(Instant::now())
            .ok_or_else(|| Error::fetch(s!("deadline exceeded")))?;

        let resp = client
            .get(target.clone())
            .timeout(remaining)
            .send()
            .map_err(|e| Error::fetch(e.to_string()))?;

        let status = resp.status();
        if status.is_redirection() {
            // A 3xx without Location falls through to the status check.
            if let Some(loc) = resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()) {
                target = resp
                    .url()
                    .join(loc)
                    .map_err(|e| Error::fetch(format!("bad redirect target {loc}: {e}")))?;
                logd!("hop {}: {} -> {}", hop + 1, status.as_u16(), target);
                continue;
            }
        }

        if !status.is_success() {
            return Err(Error::fetch(format!("HTTP {status}")));
        }
        return resp.text().map_err(|e| Error::fetch(e.to_string()));
    }

    Err(Error::RedirectLoop { limit: MAX_REDIRECT_HOPS })
}
