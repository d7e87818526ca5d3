//! One-shot loopback HTTP server for endpoint tests

use crate::client::RestroomClient;
use crate::config::ClientConfig;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// What the server received
pub(crate) struct CapturedRequest {
    pub request_line: String,
    pub headers: String,
    pub body: serde_json::Value,
}

/// Answers exactly one request with a canned response
pub(crate) struct OneShotServer {
    base_url: String,
    handle: JoinHandle<CapturedRequest>,
}

impl OneShotServer {
    pub fn respond(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let captured = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            captured
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/api"),
            handle,
        }
    }

    pub fn client(&self) -> RestroomClient {
        let config = ClientConfig::development()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(5));
        RestroomClient::with_config(config).unwrap()
    }

    pub fn captured(self) -> CapturedRequest {
        self.handle.join().unwrap()
    }
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            let body_start = end + 4;
            let length = content_length(&head);
            if buf.len() >= body_start + length {
                let (request_line, headers) = head.split_once("\r\n").unwrap_or((&head, ""));
                let body = &buf[body_start..body_start + length];
                return CapturedRequest {
                    request_line: request_line.to_string(),
                    headers: headers.to_ascii_lowercase(),
                    body: serde_json::from_slice(body).unwrap_or(serde_json::Value::Null),
                };
            }
        }

        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "client closed the connection mid-request");
        buf.extend_from_slice(&chunk[..n]);
    }
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}
