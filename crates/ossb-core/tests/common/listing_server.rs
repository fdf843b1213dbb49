//! Minimal HTTP/1.1 server that answers every GET with one canned response.
//!
//! Serves a fixed status line and body so integration tests can exercise the
//! real curl-backed listing source against well-formed listings, malformed
//! XML, and error statuses.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
struct Canned {
    status: &'static str,
    body: Vec<u8>,
}

/// Starts a server in a background thread answering `200 OK` with `body`.
/// Returns the base URL (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(body: &str) -> String {
    start_with_status("200 OK", body)
}

/// Like `start` but with a custom status line (e.g. "404 Not Found").
pub fn start_with_status(status: &'static str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let canned = Arc::new(Canned {
        status,
        body: body.as_bytes().to_vec(),
    });
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let canned = Arc::clone(&canned);
            thread::spawn(move || handle(stream, &canned));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// A URL on a port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, canned: &Canned) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let method = request.split_whitespace().next().unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        canned.status,
        canned.body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&canned.body);
}
