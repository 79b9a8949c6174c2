//! Blocking client for a place-details HTTP API.
//!
//! # Overview
//! A `Service` carries the API key, base URL and transport. Each request is a
//! `DetailsCall` borrowed from the service: it builds the query string, issues
//! one GET, decodes the JSON body and maps the API's `status` field onto
//! `ApiError`.
//!
//! # Design
//! - `Service` is immutable after construction and can be shared by any
//!   number of calls.
//! - The network sits behind the `HttpTransport` trait. `UreqTransport` is
//!   the default; tests plug in their own.
//! - Failures are never retried or recovered locally. Transport and decode
//!   errors reach the caller unmodified.
//!
//! ```no_run
//! use places_core::{Service, ServiceConfig};
//!
//! let config = ServiceConfig::from_env()?;
//! let service = Service::from_config(&config);
//! let details = service
//!     .details("ChIJLU7jZClu5kcR4PcOOO6p3I0")
//!     .language("en")
//!     .extensions("review_summary")
//!     .send()?;
//! println!("{:?}", details.result.and_then(|place| place.name));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod status;
pub mod types;

pub use client::{DetailsCall, Service};
pub use config::ServiceConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpRequest, HttpResponse, HttpTransport, TransportError, UreqTransport};
pub use status::ApiStatus;
pub use types::{DetailsResponse, PlaceDetails};
