//! In-process mock of the alignment backend.
//!
//! Serves canned JSON for exact `(method, path?query)` matches and records
//! every request so tests can assert on headers and bodies.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use align_client::ApiClient;

#[derive(Debug, Clone)]
pub struct Route {
    method: &'static str,
    url: String,
    status: u16,
    body: String,
}

impl Route {
    pub fn get(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: "GET",
            url: url.into(),
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: "POST",
            url: url.into(),
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

pub struct MockServer {
    server: Arc<tiny_http::Server>,
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    worker: Option<JoinHandle<()>>,
}

impl MockServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind mock server"));
        let port = server.server_addr().to_ip().expect("should be IP address").port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let worker = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let recorded = RecordedRequest {
                        method: request.method().to_string().to_uppercase(),
                        url: request.url().to_string(),
                        headers: request
                            .headers()
                            .iter()
                            .map(|h| (h.field.as_str().as_str().to_string(), h.value.as_str().to_string()))
                            .collect(),
                        body,
                    };
                    let route = routes
                        .iter()
                        .find(|r| r.method == recorded.method && r.url == recorded.url);
                    requests.lock().unwrap().push(recorded);

                    let (status, body) = route.map_or_else(
                        || (404, r#"{"detail":"Not found."}"#.to_string()),
                        |r| (r.status, r.body.clone()),
                    );
                    let response = tiny_http::Response::from_string(body)
                        .with_status_code(status)
                        .with_header(
                            tiny_http::Header::from_bytes("Content-Type", "application/json")
                                .unwrap(),
                        );
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
            worker: Some(worker),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client pointed at this server with no one logged in.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url()).expect("client should build")
    }

    /// Client pointed at this server with `token` already in the session.
    pub fn authed_client(&self, token: &str) -> ApiClient {
        let client = self.client();
        client.session().sign_in("reviewer", token);
        client
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
