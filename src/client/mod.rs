//! Status client module
//!
//! Talks to the local Sametime web API. The endpoint is fixed; the only
//! input is the user id passed as a query parameter.

use std::io::Read;
use std::time::Duration;

use crate::error::{Result, TrackerError};

/// Sametime `getstatus` endpoint, queried with `?userId=<id>`
pub const GETSTATUS_URL: &str = "http://localhost:59449/stwebapi/getstatus";

/// Source of raw presence-status responses
pub trait StatusSource {
    /// Fetch the raw response body for a user
    fn fetch(&self, user_id: &str) -> Result<Vec<u8>>;

    /// Check that the source answers at all
    fn probe(&self, user_id: &str) -> Result<()> {
        self.fetch(user_id)
            .map(|_| ())
            .map_err(|_| TrackerError::ApiDisabled)
    }
}

/// Blocking HTTP client for the Sametime web API
pub struct StatusClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl StatusClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(GETSTATUS_URL)
    }

    fn with_endpoint(endpoint: &str) -> Result<Self> {
        // reqwest's blocking client defaults to a 30s timeout
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    fn send(&self, user_id: &str) -> Result<reqwest::blocking::Response> {
        log::debug!("GET {}?userId={}", self.endpoint, user_id);
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("userId", user_id)])
            .send()?;
        Ok(response)
    }
}

impl StatusSource for StatusClient {
    fn fetch(&self, user_id: &str) -> Result<Vec<u8>> {
        let mut response = self.send(user_id)?;

        let mut body = Vec::new();
        response.read_to_end(&mut body)?;
        log::debug!("Received {} bytes (HTTP {})", body.len(), response.status());

        Ok(body)
    }

    /// Any HTTP response counts; only transport failures disable tracking
    fn probe(&self, user_id: &str) -> Result<()> {
        self.send(user_id)
            .map(|_| ())
            .map_err(|_| TrackerError::ApiDisabled)
    }
}
