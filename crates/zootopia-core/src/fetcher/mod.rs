//! Name-keyed lookup against the animals endpoint.
//!
//! One GET per call: `{api_url}?name={name}` with the API key in `X-Api-Key`.
//! A 2xx body is decoded as a JSON array of raw records; everything else is
//! a [`FetchError`] that callers treat as "no results".

mod error;
mod transport;

pub use error::FetchError;
pub use transport::{CurlTransport, HttpResponse, Transport};

use serde_json::Value;
use url::Url;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// One undecoded record as returned by the service (normally a JSON object).
pub type RawRecord = Value;

/// Client for the lookup endpoint. The key is injected, never read from ambient state.
#[derive(Debug, Clone)]
pub struct AnimalClient<T = CurlTransport> {
    api_url: String,
    api_key: Option<String>,
    transport: T,
}

impl AnimalClient<CurlTransport> {
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_transport(api_url, api_key, CurlTransport)
    }
}

impl<T: Transport> AnimalClient<T> {
    pub fn with_transport(api_url: impl Into<String>, api_key: Option<String>, transport: T) -> Self {
        Self {
            api_url: api_url.into(),
            api_key,
            transport,
        }
    }

    /// Full request URL for `name`, with the name form-encoded into the query.
    pub fn lookup_url(&self, name: &str) -> Result<String, FetchError> {
        let mut url = Url::parse(&self.api_url).map_err(|source| FetchError::InvalidUrl {
            url: self.api_url.clone(),
            source,
        })?;
        url.query_pairs_mut().append_pair("name", name);
        Ok(url.into())
    }

    /// Looks up `name`. Ok(empty) means the service knows no such animal.
    pub fn fetch(&self, name: &str) -> Result<Vec<RawRecord>, FetchError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FetchError::EmptyQuery);
        }
        let url = self.lookup_url(name)?;

        let mut headers: Vec<(&str, &str)> = Vec::with_capacity(1);
        if let Some(key) = self.api_key.as_deref() {
            headers.push((API_KEY_HEADER, key));
        }

        tracing::debug!(%url, authenticated = self.api_key.is_some(), "lookup request");
        let resp = self.transport.get(&url, &headers)?;
        if !resp.is_success() {
            return Err(FetchError::Status {
                status: resp.status,
                body: resp.body_text(),
            });
        }

        let records = decode_records(&resp.body)?;
        tracing::info!(name, count = records.len(), "lookup returned records");
        Ok(records)
    }
}

/// Decodes a response body as a JSON array. Elements are kept raw so one
/// malformed element can be skipped later without losing the rest.
pub fn decode_records(body: &[u8]) -> Result<Vec<RawRecord>, FetchError> {
    Ok(serde_json::from_slice::<Vec<Value>>(body)?)
}

#[cfg(test)]
mod tests;
