//! Data access for the external appointment API.
//!
//! The clinic's appointment store lives behind a GraphQL endpoint that this
//! repository does not implement. This crate wraps it in a small typed
//! client: one query (`availableSlots`) and three mutations (`addSlot`,
//! `removeSlot`, `bookSlot`), exposed through the [`SlotRepository`] trait
//! so the web layer can be tested against a mock.

pub mod mock;
pub mod operations;
pub mod repository;

pub use repository::SlotRepository;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use slotbook_core::errors::{BookingError, BookingResult};
use tracing::debug;

/// The standard GraphQL-over-HTTP request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// The standard GraphQL response envelope. A response can carry both data
/// and errors; any error entry means the operation was not honored.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

/// HTTP client for the external appointment API.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlClient {
    pub fn new(endpoint: &str) -> eyre::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    /// Posts one operation and decodes its data payload.
    ///
    /// Transport and HTTP-level failures map to [`BookingError::Api`];
    /// a non-empty `errors` array maps to [`BookingError::Rejected`].
    /// Nothing is retried.
    pub(crate) async fn post<V, T>(&self, query: &str, variables: V) -> BookingResult<T>
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        debug!(endpoint = %self.endpoint, "posting GraphQL operation");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|err| BookingError::Api(err.into()))?
            .error_for_status()
            .map_err(|err| BookingError::Api(err.into()))?;

        let envelope: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|err| BookingError::Api(err.into()))?;

        if !envelope.errors.is_empty() {
            let messages: Vec<String> = envelope
                .errors
                .into_iter()
                .map(|entry| entry.message)
                .collect();
            return Err(BookingError::Rejected(messages.join("; ")));
        }

        envelope
            .data
            .ok_or_else(|| BookingError::Rejected("response carried no data".to_string()))
    }
}
