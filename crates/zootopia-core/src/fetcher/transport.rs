//! Blocking HTTP GET via libcurl.

use std::str;

use super::error::FetchError;

/// Status and raw body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text for diagnostics (lossy).
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs a single GET. Implemented by [`CurlTransport`]; tests substitute a fake.
pub trait Transport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, FetchError>;
}

/// Transport backed by a fresh `curl::easy::Easy` per request.
/// Timeouts and TLS settings are libcurl defaults.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.useragent(concat!("zootopia/", env!("CARGO_PKG_VERSION")))?;

        // Build curl list for request headers (e.g. "X-Api-Key: value").
        let mut list = curl::easy::List::new();
        for (k, v) in headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !headers.is_empty() {
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    tracing::trace!(header = s.trim_end(), "response header");
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse { status, body })
    }
}
