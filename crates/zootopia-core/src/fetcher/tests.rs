//! Fetcher tests against an in-memory transport.

use super::*;
use std::cell::RefCell;

/// Records every request and answers with a canned response.
struct FakeTransport {
    response: Result<HttpResponse, ()>,
    seen: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeTransport {
    fn answering(status: u32, body: &str) -> Self {
        Self {
            response: Ok(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            response: Err(()),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for &FakeTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, FetchError> {
        self.seen.borrow_mut().push((
            url.to_string(),
            headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ));
        match &self.response {
            Ok(r) => Ok(r.clone()),
            Err(()) => Err(FetchError::Transport(curl::Error::new(7))),
        }
    }
}

const FOX: &str = r#"[{"name":"Fox","taxonomy":{"scientific_name":"Vulpes vulpes"},"locations":["North America"],"characteristics":{"diet":"Omnivore"}}]"#;

#[test]
fn fetch_sends_name_and_key() {
    let fake = FakeTransport::answering(200, FOX);
    let client = AnimalClient::with_transport(
        "https://api.example.com/v1/animals",
        Some("k3y".to_string()),
        &fake,
    );
    let records = client.fetch("fox").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Fox");

    let seen = fake.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "https://api.example.com/v1/animals?name=fox");
    assert_eq!(
        seen[0].1,
        vec![("X-Api-Key".to_string(), "k3y".to_string())]
    );
}

#[test]
fn fetch_without_key_sends_no_header() {
    let fake = FakeTransport::answering(200, "[]");
    let client = AnimalClient::with_transport("https://api.example.com/v1/animals", None, &fake);
    assert!(client.fetch("fox").unwrap().is_empty());
    assert!(fake.seen.borrow()[0].1.is_empty());
}

#[test]
fn lookup_url_encodes_name() {
    let fake = FakeTransport::answering(200, "[]");
    let client = AnimalClient::with_transport("https://api.example.com/v1/animals", None, &fake);
    assert_eq!(
        client.lookup_url("red fox&co").unwrap(),
        "https://api.example.com/v1/animals?name=red+fox%26co"
    );
}

#[test]
fn non_ok_status_carries_status_and_body() {
    let fake = FakeTransport::answering(403, r#"{"error":"Invalid API Key."}"#);
    let client = AnimalClient::with_transport("https://api.example.com/v1/animals", None, &fake);
    let err = client.fetch("fox").unwrap_err();
    assert_eq!(err.status(), Some(403));
    let msg = err.to_string();
    assert!(msg.contains("403"));
    assert!(msg.contains("Invalid API Key."));
}

#[test]
fn transport_failure_is_reported() {
    let fake = FakeTransport::failing();
    let client = AnimalClient::with_transport("https://api.example.com/v1/animals", None, &fake);
    let err = client.fetch("fox").unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[test]
fn non_array_body_is_decode_error() {
    let fake = FakeTransport::answering(200, r#"{"name":"Fox"}"#);
    let client = AnimalClient::with_transport("https://api.example.com/v1/animals", None, &fake);
    assert!(matches!(client.fetch("fox"), Err(FetchError::Decode(_))));
}

#[test]
fn empty_name_is_rejected_without_request() {
    let fake = FakeTransport::answering(200, "[]");
    let client = AnimalClient::with_transport("https://api.example.com/v1/animals", None, &fake);
    assert!(matches!(client.fetch("   "), Err(FetchError::EmptyQuery)));
    assert!(fake.seen.borrow().is_empty());
}

#[test]
fn invalid_endpoint_is_reported() {
    let fake = FakeTransport::answering(200, "[]");
    let client = AnimalClient::with_transport("not a url", None, &fake);
    assert!(matches!(
        client.fetch("fox"),
        Err(FetchError::InvalidUrl { .. })
    ));
}

#[test]
fn decode_keeps_non_object_elements() {
    let records = decode_records(br#"[{"name":"Fox"}, 42, null]"#).unwrap();
    assert_eq!(records.len(), 3);
}
