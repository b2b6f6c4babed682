//! Minimal HTTP/1.1 server that serves a favicon for integration tests.
//!
//! Serves a single static body on every GET. Can be told to answer with a
//! non-200 status, to redirect, or to stall before answering (timeouts).

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct FaviconServerOptions {
    /// Status line to send (default "200 OK").
    pub status: Option<&'static str>,
    /// If set, respond 302 with this `Location` instead of the body.
    pub redirect_to: Option<String>,
    /// Sleep this long before writing anything (simulates a hung host).
    pub stall: Option<Duration>,
}

/// Starts a server in a background thread serving `body`. Returns the base URL
/// without a trailing slash (e.g. "http://127.0.0.1:12345"). The server runs
/// until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, FaviconServerOptions::default())
}

/// Like `start` but allows customizing server behavior (status, redirect, stall).
pub fn start_with_options(body: Vec<u8>, opts: FaviconServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &body, &opts));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: &FaviconServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let method = request.split_whitespace().next().unwrap_or("");

    if let Some(stall) = opts.stall {
        thread::sleep(stall);
    }

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    if let Some(location) = &opts.redirect_to {
        let response = format!(
            "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            location
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    let status = opts.status.unwrap_or("200 OK");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: image/x-icon\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
