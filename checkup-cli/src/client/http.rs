use std::time::Duration;

use http::Uri;
use reqwest::{Client, Method};
use tracing::debug;

use super::ClientError;
use crate::report::ProbeResult;
use crate::suite::{ProbeSpec, Verb};

/// HTTP client for probing the target service.
pub struct ProbeClient {
    client: Client,
    base_url: String,
}

impl ProbeClient {
    /// Build a client for the given origin. The timeout bounds every probe;
    /// expiry is classified like any other transport failure.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = normalize_base(base_url)?;
        let client = Client::builder()
            .user_agent(concat!("checkup/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one probe. Any received HTTP response, 5xx included, yields a
    /// result with the real status; failure to obtain a response yields the
    /// sentinel status. Never returns an error — one dead endpoint must not
    /// abort the sweep.
    pub async fn execute(&self, spec: &ProbeSpec) -> ProbeResult {
        let url = format!("{}{}", self.base_url, spec.path);
        let mut request = self.client.request(method_of(spec.verb), &url);
        if let Some(body) = &spec.body {
            request = request.json(body);
        }
        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(%url, status, "probe completed");
                ProbeResult::from_status(spec, status)
            }
            Err(err) => {
                debug!(%url, error = %err, "probe got no response");
                ProbeResult::unreachable(spec)
            }
        }
    }
}

fn method_of(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Delete => Method::DELETE,
        Verb::Patch => Method::PATCH,
    }
}

/// Require a well-formed origin and strip any trailing slash so that path
/// concatenation stays unambiguous.
fn normalize_base(url: &str) -> Result<String, ClientError> {
    let uri: Uri = url
        .parse()
        .map_err(|_| ClientError::InvalidTarget(url.to_string()))?;
    if uri.scheme().is_none() || uri.host().is_none() {
        return Err(ClientError::InvalidTarget(url.to_string()));
    }
    Ok(url.trim_end_matches('/').to_string())
}
