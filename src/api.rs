//! Request paths and response envelope types for the MBTA v3 API.
//!
//! Every endpoint returns the same two-shape nesting:
//! `{"data": [{"id": ..., "attributes": {...}}, ...]}`.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

pub const API_URL: &str = "https://api-v3.mbta.com/";

/// An API request path with an ordered list of query parameters.
///
/// Parameters are appended in insertion order and joined with `&`, with a
/// leading `?` only when at least one parameter is present. Optional filters
/// that are `None` are skipped entirely.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    resource: &'static str,
    params: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn maybe_param(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// The request path relative to the API base, e.g.
    /// `alerts?filter[route]=Red`.
    pub fn path(&self) -> String {
        if self.params.is_empty() {
            return self.resource.to_string();
        }

        let query: Vec<String> = self
            .params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();

        format!("{}?{}", self.resource, query.join("&"))
    }

    pub fn url(&self) -> String {
        format!("{}{}", API_URL, self.path())
    }
}

/// Top-level response envelope shared by all endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Vec<Resource<T>>,
}

/// One record in the `data` array: an opaque id plus typed attributes.
#[derive(Debug, Deserialize)]
pub struct Resource<T> {
    pub id: String,
    pub attributes: T,
}

#[derive(Debug, Deserialize)]
pub struct AlertAttributes {
    pub short_header: String,
    pub header: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub effect: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Deserialize)]
pub struct StopAttributes {
    pub name: String,
}
