use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Error, Result};

/// Path appended to every target before probing.
const GIT_HEAD_SUFFIX: &str = "/.git/HEAD";

/// Marker an exposed HEAD file starts with.
const REF_MARKER: &str = "ref: refs/heads/";

/// Classification of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The probed URL (including the `/.git/HEAD` suffix) serves a readable
    /// Git reference file.
    Exposed(String),
    NotExposed,
    TransportError,
}

/// One probe per target. The engine and its tests depend on this seam rather
/// than on a concrete HTTP client.
pub trait Probe: Send + Sync {
    fn probe(&self, target: &str) -> ProbeOutcome;
}

/// Production prober: a single blocking HTTP GET of `<target>/.git/HEAD`.
/// Stateless after construction; safe to share across worker threads.
#[derive(Debug)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(timeout: Duration, headers: &HashMap<String, String>) -> Result<Self> {
        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::InvalidHeader(name.to_string()))?;
            header_map.insert(name, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(header_map)
            .build()?;

        Ok(Self { client })
    }
}

impl Probe for HttpProber {
    fn probe(&self, target: &str) -> ProbeOutcome {
        let url = format!("{}{}", target, GIT_HEAD_SUFFIX);
        log::info!("[prober] looking at {}", url);

        let response = match self.client.get(url.as_str()).send() {
            Ok(response) => response,
            Err(e) => {
                log::debug!("[prober] transport_error: url={} error={}", url, e);
                return ProbeOutcome::TransportError;
            }
        };

        let status = response.status().as_u16();
        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                log::debug!("[prober] body_read_failed: url={} error={}", url, e);
                return ProbeOutcome::TransportError;
            }
        };

        classify(status, &body, &url)
    }
}

/// Classify a probe response. 200 with the Git ref marker in the body is the
/// only combination reported as a finding.
fn classify(status: u16, body: &str, url: &str) -> ProbeOutcome {
    if status == 200 && body.contains(REF_MARKER) {
        log::info!("[prober] exposed: url={}", url);
        ProbeOutcome::Exposed(url.to_string())
    } else {
        ProbeOutcome::NotExposed
    }
}
