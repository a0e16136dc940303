//! Minimal HTTP/1.1 server answering canned JSON responses
//!
//! Each connection serves exactly one request and is then closed. Routes are
//! matched on the full request target first, then on the path without its
//! query string. `{base}` inside a body or header value is replaced by the
//! server's own URL so responses can link back to it.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct StubRoute {
    pub target: String,
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

impl StubRoute {
    pub fn json(target: &str, body: &str) -> Self {
        Self::status(target, 200, body)
    }

    pub fn status(target: &str, status: u16, body: &str) -> Self {
        Self {
            target: target.to_string(),
            status,
            body: body.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// A request as seen by the server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub target: String,
    /// Header names are lowercased
    pub headers: HashMap<String, String>,
}

pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn start(routes: Vec<StubRoute>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let base = format!("http://{}", addr);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                serve(stream, &routes, &base, &recorded);
            }
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn targets(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.target).collect()
    }
}

fn serve(
    stream: TcpStream,
    routes: &[StubRoute],
    base: &str,
    recorded: &Mutex<Vec<RecordedRequest>>,
) {
    let mut reader = BufReader::new(match stream.try_clone() {
        Ok(s) => s,
        Err(_) => return,
    });

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }
    }

    recorded.lock().unwrap().push(RecordedRequest {
        target: target.clone(),
        headers,
    });

    let path = target.split('?').next().unwrap_or("/");
    let route = routes
        .iter()
        .find(|r| r.target == target)
        .or_else(|| routes.iter().find(|r| r.target == path));

    let (status, body, extra_headers): (u16, String, Vec<(String, String)>) = match route {
        Some(route) => (
            route.status,
            route.body.replace("{base}", base),
            route
                .headers
                .iter()
                .map(|(n, v)| (n.clone(), v.replace("{base}", base)))
                .collect(),
        ),
        None => (404, r#"{"message":"Not Found"}"#.to_string(), Vec::new()),
    };

    let mut response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        reason(status),
        body.len()
    );
    for (name, value) in extra_headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    response.push_str(&body);

    let mut stream = stream;
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        202 => "Accepted",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
