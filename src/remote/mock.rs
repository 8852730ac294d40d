use super::transport::{HttpResponse, HttpTransport, TransportError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A request observed by [`MockTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// In-memory transport keyed by exact URL. Unknown URLs answer 404.
pub struct MockTransport {
    responses: RwLock<HashMap<String, Result<HttpResponse, TransportError>>>,
    requests: RwLock<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub fn add_response(&self, url: impl Into<String>, status: u16, content_type: &str, body: &str) {
        let response = HttpResponse {
            status,
            content_type: Some(content_type.to_string()),
            body: body.to_string(),
        };
        self.responses
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .insert(url.into(), Ok(response));
    }

    pub fn add_json(&self, url: impl Into<String>, body: &serde_json::Value) {
        self.add_response(url, 200, "application/json; charset=utf-8", &body.to_string());
    }

    pub fn add_text(&self, url: impl Into<String>, body: &str) {
        self.add_response(url, 200, "text/plain; charset=utf-8", body);
    }

    pub fn add_status(&self, url: impl Into<String>, status: u16) {
        self.add_response(url, status, "application/json", "{\"message\":\"error\"}");
    }

    pub fn add_error(&self, url: impl Into<String>, error: TransportError) {
        self.responses
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .insert(url.into(), Err(error));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn request_for(&self, url: &str) -> Option<RecordedRequest> {
        self.requests
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .iter()
            .find(|r| r.url == url)
            .cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        self.requests
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .push(RecordedRequest {
                url: url.to_string(),
                headers: headers.to_vec(),
            });

        let responses = self.responses.read().unwrap_or_else(|p| p.into_inner());
        match responses.get(url) {
            Some(response) => response.clone(),
            None => Ok(HttpResponse {
                status: 404,
                content_type: Some("application/json".to_string()),
                body: "{\"message\":\"Not Found\"}".to_string(),
            }),
        }
    }
}
