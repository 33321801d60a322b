//! Shared test support: a transport double that replays stubbed
//! responses and records every request it sees.

#![allow(dead_code)]

use std::sync::Mutex;

use opalpay::{
    error::Result,
    transport::{Endpoint, Transport, TransportResponse},
};

/// One request as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub endpoint: Endpoint,
    pub path: String,
    pub body: Option<String>,
}

/// Transport double with a FIFO queue of stubbed responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<Vec<TransportResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport primed with a single response.
    pub fn stub(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.push_response(status, body);
        transport
    }

    /// Queues another response.
    pub fn push_response(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push(TransportResponse { status, body: body.as_bytes().to_vec() });
    }

    /// Everything the transport was asked to send, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn replay(
        &self,
        method: &'static str,
        endpoint: Endpoint,
        path: &str,
        body: Option<&str>,
    ) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            endpoint,
            path: path.to_owned(),
            body: body.map(str::to_owned),
        });

        let mut responses = self.responses.lock().unwrap();
        assert!(!responses.is_empty(), "no stubbed response left for {method} {path}");
        Ok(responses.remove(0))
    }
}

impl Transport for MockTransport {
    async fn get(&self, endpoint: Endpoint, path: &str) -> Result<TransportResponse> {
        self.replay("GET", endpoint, path, None)
    }

    async fn post(&self, endpoint: Endpoint, path: &str, body: &str) -> Result<TransportResponse> {
        self.replay("POST", endpoint, path, Some(body))
    }

    async fn patch(&self, endpoint: Endpoint, path: &str, body: &str) -> Result<TransportResponse> {
        self.replay("PATCH", endpoint, path, Some(body))
    }

    async fn delete(&self, endpoint: Endpoint, path: &str) -> Result<TransportResponse> {
        self.replay("DELETE", endpoint, path, None)
    }
}
