//! HTTP client for the location finder REST API.
//!
//! Every operation is a single authenticated `GET`. A 2xx body is parsed
//! into the operation's payload type; any other status is parsed as a
//! [`FailureResponse`] and returned inside the [`Envelope`]. A body that fits
//! neither shape surfaces as [`ClientError::MalformedResponse`].

use std::time::Duration;

use locfinder_core::params::WireParams;
use locfinder_core::{
    ClientConfig, Envelope, FailureResponse, FindByAddressParams, FindByGeoParams,
    FindByKeywordIdParams, LocationList, QueryParams, ServicePoint,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "DHL-API-Key";

const DEFAULT_BASE_URL: &str = locfinder_core::app_config::DEFAULT_BASE_URL;
const DEFAULT_USER_AGENT: &str = "locfinder/0.1 (service-point-lookup)";

const FIND_BY_ADDRESS: &str = "location-finder/v1/find-by-address";
const FIND_BY_GEO: &str = "location-finder/v1/find-by-geo";
const FIND_BY_KEYWORD_ID: &str = "location-finder/v1/find-by-keyword-id";
const LOCATIONS: &str = "location-finder/v1/locations/";

/// Client for the location finder API.
///
/// Use [`LocationFinderClient::new`] for production,
/// [`LocationFinderClient::with_base_url`] to point at a mock server in
/// tests, or [`LocationFinderClient::from_config`] with a loaded
/// [`ClientConfig`].
pub struct LocationFinderClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl std::fmt::Debug for LocationFinderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationFinderClient")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl LocationFinderClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidTimeout`] if
    /// `timeout_secs` is zero.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, [`ClientError::InvalidTimeout`] if
    /// `timeout_secs` is zero, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ClientError> {
        Self::build(api_key, timeout_secs, base_url, DEFAULT_USER_AGENT)
    }

    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`LocationFinderClient::with_base_url`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::build(
            &config.api_key,
            config.timeout_secs,
            &config.base_url,
            &config.user_agent,
        )
    }

    fn build(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        if timeout_secs == 0 {
            return Err(ClientError::InvalidTimeout);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so relative endpoint paths join onto
        // the base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: normalised,
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Normalised base URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Searches for service points near an address.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::MalformedResponse`] if the body does not match the
    ///   expected success or failure shape.
    pub async fn find_by_address(
        &self,
        params: &FindByAddressParams,
    ) -> Result<Envelope<Vec<ServicePoint>>, ClientError> {
        let url = self.build_url(FIND_BY_ADDRESS, Some(&params.to_request_format()))?;
        let envelope: Envelope<LocationList> = self.call_endpoint("find-by-address", url).await?;
        Ok(envelope.map(|list| list.locations))
    }

    /// Searches for service points around a coordinate pair.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::MalformedResponse`] if the body does not match the
    ///   expected success or failure shape.
    pub async fn find_by_geo(
        &self,
        params: &FindByGeoParams,
    ) -> Result<Envelope<Vec<ServicePoint>>, ClientError> {
        let url = self.build_url(FIND_BY_GEO, Some(&params.to_request_format()))?;
        let envelope: Envelope<LocationList> = self.call_endpoint("find-by-geo", url).await?;
        Ok(envelope.map(|list| list.locations))
    }

    /// Looks up the single service point matching a keyword id
    /// (e.g. a Packstation number) within a postal code.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::MalformedResponse`] if the body does not match the
    ///   expected success or failure shape.
    pub async fn find_by_keyword_id(
        &self,
        params: &FindByKeywordIdParams,
    ) -> Result<Envelope<ServicePoint>, ClientError> {
        let url = self.build_url(FIND_BY_KEYWORD_ID, Some(&params.to_request_format()))?;
        self.call_endpoint("find-by-keyword-id", url).await
    }

    /// Retrieves one service point by its location id.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidLocationId`] if `location_id` is blank; no
    ///   request is sent.
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::MalformedResponse`] if the body does not match the
    ///   expected success or failure shape.
    pub async fn find_by_location_id(
        &self,
        location_id: &str,
    ) -> Result<Envelope<ServicePoint>, ClientError> {
        let url = self.location_url(location_id)?;
        self.call_endpoint("locations", url).await
    }

    /// Joins `path` onto the base URL and appends the encoded query.
    fn build_url(&self, path: &str, params: Option<&WireParams>) -> Result<Url, ClientError> {
        let mut url = self.join(path)?;
        if let Some(params) = params {
            let pairs = query_pairs(params);
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }
        Ok(url)
    }

    /// Builds `locations/{id}` with the id percent-encoded as one segment.
    fn location_url(&self, location_id: &str) -> Result<Url, ClientError> {
        if location_id.trim().is_empty() {
            return Err(ClientError::InvalidLocationId(location_id.to_string()));
        }

        let mut url = self.join(LOCATIONS)?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .push(location_id);
        Ok(url)
    }

    fn join(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Sends an authenticated GET and builds the envelope from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on network failure and
    /// [`ClientError::MalformedResponse`] if the body fits neither branch.
    async fn call_endpoint<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: Url,
    ) -> Result<Envelope<T>, ClientError> {
        tracing::debug!(operation, url = %url, "location finder request");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let payload: T =
                serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse {
                    context: format!("{operation} (HTTP {})", status.as_u16()),
                    source: e,
                })?;
            return Ok(Envelope::Success(payload));
        }

        let failure: FailureResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse {
                context: format!("{operation} failure body (HTTP {})", status.as_u16()),
                source: e,
            })?;
        tracing::warn!(
            operation,
            http_status = status.as_u16(),
            status = %failure.status,
            title = failure.title.as_deref().unwrap_or_default(),
            "location finder returned a failure response"
        );
        Ok(Envelope::Failure(failure))
    }
}

/// Flattens encoded parameters into query pairs.
///
/// `null` values are omitted, lists repeat the key once per element and
/// scalars use their JSON text form (strings unquoted).
pub(crate) fn query_pairs(params: &WireParams) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
