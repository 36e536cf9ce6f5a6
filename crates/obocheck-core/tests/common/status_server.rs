//! Minimal HTTP/1.1 server that answers with a status chosen by the request path.
//!
//! - `GET /status/<code>` responds with `<code>` and an empty body.
//! - `GET /redirect/<code>` responds `302 Found` with `Location: /status/<code>`.
//! - `GET /hop/<n>` redirects to `/hop/<n-1>`; `/hop/0` responds 200.
//! - `GET /slow` waits before answering 200 (for timeout tests).
//! - Anything else is `404 Not Found`.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// How long `/slow` stalls before responding.
pub const SLOW_DELAY: Duration = Duration::from_secs(3);

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A URL on a local port nothing listens on (connection refused).
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream) {
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
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let response = if let Some(code) = path.strip_prefix("/status/") {
        match code.parse::<u16>() {
            Ok(code) => status_response(code, ""),
            Err(_) => status_response(400, ""),
        }
    } else if let Some(code) = path.strip_prefix("/redirect/") {
        status_response(302, &format!("Location: /status/{}\r\n", code))
    } else if let Some(n) = path.strip_prefix("/hop/") {
        match n.parse::<u32>() {
            Ok(0) => status_response(200, ""),
            Ok(n) => status_response(302, &format!("Location: /hop/{}\r\n", n - 1)),
            Err(_) => status_response(400, ""),
        }
    } else if path == "/slow" {
        thread::sleep(SLOW_DELAY);
        status_response(200, "")
    } else {
        status_response(404, "")
    };
    let _ = stream.write_all(response.as_bytes());
}

fn status_response(code: u16, extra_headers: &str) -> String {
    format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n{}\r\n",
        code,
        reason(code),
        extra_headers
    )
}

fn reason(code: u16) -> &'static str {
    match code {
        200 => "OK",
        204 => "No Content",
        302 => "Found",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
