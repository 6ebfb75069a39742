//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with one canned status line and body, and records
//! the raw request text so tests can assert on the query and headers.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// Handle to a running server: base URL plus every request received so far.
pub struct JsonServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl JsonServer {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. `status` is the status line
/// without the protocol (e.g. "200 OK"). Runs until the process exits.
pub fn start(status: &str, body: &str) -> JsonServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
            let mut buf = [0u8; 8192];
            let n = match stream.read(&mut buf) {
                Ok(0) | Err(_) => continue,
                Ok(n) => n,
            };
            seen.lock()
                .unwrap()
                .push(String::from_utf8_lossy(&buf[..n]).into_owned());
            let _ = stream.write_all(response.as_bytes());
        }
    });
    JsonServer {
        url: format!("http://127.0.0.1:{}/v1/animals", port),
        requests,
    }
}
