//! MBTA v3 API client.
//!
//! This module provides an HTTP client for the MBTA's public v3 API
//! (`https://api-v3.mbta.com`), plus a file-backed mock that serves the same
//! documents offline.
//!
//! Key characteristics of the API:
//! - Responses are JSON:API documents: a top-level `data` array of resources,
//!   each with an `id` and an `attributes` object
//! - Collections are filtered with `filter[...]` query parameters
//! - Prediction times are ISO 8601 with a UTC offset, and may be `null`
//! - An API key is optional; anonymous clients get a lower rate limit

mod api;
mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use api::TransitApi;
pub use client::{MbtaClient, MbtaConfig};
pub use convert::{ConversionError, convert_predictions, convert_routes, convert_stops};
pub use error::MbtaError;
pub use mock::MockMbtaClient;
pub use types::{Document, PredictionAttributes, Resource, RouteAttributes, StopAttributes};
