//! SpaceX query-API client.
//!
//! Issues a single POST against the provider's query endpoint asking for
//! every launch document with the `rocket` and `payloads` relations
//! expanded, then maps the documents into [`Launch`] records.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use super::{LaunchProvider, ProviderError, ProviderResult};
use crate::models::Launch;

/// Provider endpoint configuration.
///
/// Injected into the client at construction time; nothing in this module
/// reads the environment directly.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Full URL of the provider's launch query endpoint
    pub url: String,
}

impl ProviderConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Reqwest-based client for the SpaceX query API.
#[derive(Debug, Clone)]
pub struct SpaceXClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl SpaceXClient {
    /// Create a new client for the given endpoint.
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn query_body() -> serde_json::Value {
        json!({
            "query": {},
            "options": {
                "pagination": false,
                "populate": [
                    {
                        "path": "rocket",
                        "select": { "name": 1 }
                    },
                    {
                        "path": "payloads",
                        "select": { "customers": 1 }
                    }
                ]
            }
        })
    }
}

#[async_trait]
impl LaunchProvider for SpaceXClient {
    async fn fetch_all_launches(&self) -> ProviderResult<Vec<Launch>> {
        info!(url = %self.config.url, "Downloading launch data");

        let response = self
            .http
            .post(&self.config.url)
            .json(&Self::query_body())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "Problem downloading launch data");
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let payload: QueryResponse = response.json().await?;
        Ok(payload.docs.into_iter().map(Launch::from).collect())
    }
}

/// Top-level shape of the provider's query response.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    docs: Vec<LaunchDoc>,
}

/// One launch document as returned by the provider.
#[derive(Debug, Deserialize)]
struct LaunchDoc {
    flight_number: u32,
    /// Mission name
    name: String,
    rocket: RocketDoc,
    #[serde(default)]
    payloads: Vec<PayloadDoc>,
    date_local: DateTime<FixedOffset>,
    upcoming: bool,
    /// Null for launches that have not happened yet
    success: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RocketDoc {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PayloadDoc {
    #[serde(default)]
    customers: Vec<String>,
}

impl From<LaunchDoc> for Launch {
    fn from(doc: LaunchDoc) -> Self {
        Launch {
            flight_number: doc.flight_number,
            mission: doc.name,
            rocket: doc.rocket.name,
            launch_date: doc.date_local.with_timezone(&Utc),
            customers: doc
                .payloads
                .into_iter()
                .flat_map(|payload| payload.customers)
                .collect(),
            upcoming: doc.upcoming,
            success: doc.success.unwrap_or(false),
        }
    }
}
