//! Place-details service and the per-request call builder.
//!
//! # Design
//! `Service` holds the transport, API key and base URL and is never mutated
//! after construction. `Service::details` returns a `DetailsCall` borrowing
//! the service, so every call is bound to exactly one service and many calls
//! can share it. A call is split the same way as the rest of the crate:
//! `build_request` produces an `HttpRequest`, `Service::parse_details`
//! consumes an `HttpResponse`, and `send` joins the two through the
//! service's transport.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, HttpTransport, UreqTransport};
use crate::types::DetailsResponse;

const DETAILS_PATH: &str = "/details/json";

/// Shared configuration for issuing place-details calls.
#[derive(Clone)]
pub struct Service<T = UreqTransport> {
    transport: T,
    key: String,
    base_url: String,
}

impl Service<UreqTransport> {
    /// A service using a fresh `ureq` agent with no timeout.
    pub fn new(key: &str, base_url: &str) -> Self {
        Self::with_transport(UreqTransport::new(), key, base_url)
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::with_transport(
            UreqTransport::with_timeout(config.timeout),
            &config.api_key,
            &config.base_url,
        )
    }
}

impl<T> Service<T> {
    pub fn with_transport(transport: T, key: &str, base_url: &str) -> Self {
        Self {
            transport,
            key: key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Start a details call for `place_id`.
    pub fn details(&self, place_id: &str) -> DetailsCall<'_, T> {
        DetailsCall {
            service: self,
            place_id: place_id.to_string(),
            language: None,
            extensions: None,
            region: None,
            fields: Vec::new(),
            session_token: None,
        }
    }

    /// Classify a raw response: non-2xx, then JSON shape, then API status.
    pub fn parse_details(&self, response: HttpResponse) -> Result<DetailsResponse, ApiError> {
        if !response.is_success() {
            warn!("place details returned HTTP {}", response.status);
            return Err(ApiError::HttpStatus {
                status: response.status,
                body: response.body_text().into_owned(),
            });
        }

        let details: DetailsResponse = serde_json::from_slice(&response.body)?;

        if details.status.is_error() {
            match &details.error_message {
                Some(message) => warn!("place details status {}: {message}", details.status),
                None => warn!("place details status {}", details.status),
            }
            return Err(ApiError::Api(details.status));
        }

        Ok(details)
    }
}

impl<T: fmt::Debug> fmt::Debug for Service<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("transport", &self.transport)
            .field("key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// A single place-details request bound to a `Service`.
#[derive(Debug, Clone)]
pub struct DetailsCall<'a, T = UreqTransport> {
    service: &'a Service<T>,
    place_id: String,
    language: Option<String>,
    extensions: Option<String>,
    region: Option<String>,
    fields: Vec<String>,
    session_token: Option<String>,
}

impl<'a, T> DetailsCall<'a, T> {
    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Extra result sections, e.g. `review_summary`.
    pub fn extensions(mut self, extensions: &str) -> Self {
        self.extensions = Some(extensions.to_string());
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Restrict the result to these fields. Sent comma-joined.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn session_token(mut self, token: &str) -> Self {
        self.session_token = Some(token.to_string());
        self
    }

    pub fn service(&self) -> &'a Service<T> {
        self.service
    }

    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    /// Encoded query string with keys in sorted order. `key` and `placeid`
    /// are always present; empty optional values are left out.
    pub fn query(&self) -> String {
        let fields = self.fields.join(",");

        let mut params: BTreeMap<&str, &str> = BTreeMap::new();
        params.insert("key", &self.service.key);
        params.insert("placeid", &self.place_id);

        let optional = [
            ("language", self.language.as_deref()),
            ("extensions", self.extensions.as_deref()),
            ("region", self.region.as_deref()),
            ("fields", Some(fields.as_str())),
            ("sessiontoken", self.session_token.as_deref()),
        ];
        for (name, value) in optional {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                params.insert(name, value);
            }
        }

        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish()
    }

    pub fn build_request(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}{DETAILS_PATH}?{}", self.service.base_url, self.query()),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

impl<T: HttpTransport> DetailsCall<'_, T> {
    /// Execute the call: one GET through the service's transport, no retries.
    pub fn send(&self) -> Result<DetailsResponse, ApiError> {
        let request = self.build_request();
        debug!(
            "GET {}{DETAILS_PATH} placeid={}",
            self.service.base_url, self.place_id
        );

        let response = self.service.transport.get(&request).map_err(|e| {
            debug!("place details transport failure: {e}");
            e
        })?;
        debug!("place details responded HTTP {}", response.status);

        self.service.parse_details(response)
    }
}
