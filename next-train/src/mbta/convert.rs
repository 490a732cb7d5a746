//! Conversion from MBTA DTOs to domain types.
//!
//! Catalog listings are lenient: a route or stop that cannot be represented
//! is logged and skipped rather than failing the whole listing. Predictions
//! are strict: a timestamp that does not parse fails the conversion, since a
//! silently dropped record could change which arrival is nearest.

use chrono::DateTime;
use tracing::{debug, warn};

use crate::domain::{Listing, Route, Stop};
use crate::predict::PredictionRecord;

use super::types::{Document, PredictionAttributes, RouteAttributes, StopAttributes};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A timestamp was present but not valid ISO 8601 with an offset
    #[error("invalid timestamp {value:?} on {resource}: {reason}")]
    InvalidTimestamp {
        resource: String,
        value: String,
        reason: String,
    },

    /// Route is missing one of its direction names
    #[error("route {0} has an unnamed direction")]
    UnnamedDirection(String),
}

/// Convert a routes document into a listing keyed by long name.
pub fn convert_routes(doc: &Document<RouteAttributes>) -> Listing<Route> {
    let mut listing = Listing::new();

    for resource in &doc.data {
        let route = match convert_route(&resource.id, &resource.attributes) {
            Ok(route) => route,
            Err(e) => {
                warn!(route = %resource.id, error = %e, "skipping route");
                continue;
            }
        };

        if let Some(previous) = listing.insert(route.name().to_string(), route) {
            warn!(
                name = %previous.name(),
                replaced = %previous.id(),
                "duplicate route name, keeping the later entry"
            );
        }
    }

    listing
}

fn convert_route(id: &str, attrs: &RouteAttributes) -> Result<Route, ConversionError> {
    let directions = attrs
        .direction_names
        .iter()
        .map(|name| name.clone().ok_or_else(|| ConversionError::UnnamedDirection(id.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route::new(id, attrs.long_name.clone(), directions))
}

/// Convert a stops document into a listing keyed by stop name.
pub fn convert_stops(doc: &Document<StopAttributes>) -> Listing<Stop> {
    let mut listing = Listing::new();

    for resource in &doc.data {
        let stop = Stop::new(resource.id.clone(), resource.attributes.name.clone());
        if let Some(previous) = listing.insert(stop.name().to_string(), stop) {
            warn!(
                name = %previous.name(),
                replaced = %previous.id(),
                "duplicate stop name, keeping the later entry"
            );
        }
    }

    listing
}

/// Convert a predictions document into records, preserving response order.
pub fn convert_predictions(
    doc: &Document<PredictionAttributes>,
) -> Result<Vec<PredictionRecord>, ConversionError> {
    doc.data
        .iter()
        .map(|resource| match &resource.attributes.arrival_time {
            None => {
                debug!(
                    prediction = %resource.id,
                    status = resource.attributes.status.as_deref().unwrap_or("none"),
                    "prediction has no arrival time"
                );
                Ok(PredictionRecord::absent())
            }
            Some(value) => DateTime::parse_from_rfc3339(value)
                .map(PredictionRecord::arriving_at)
                .map_err(|e| ConversionError::InvalidTimestamp {
                    resource: resource.id.clone(),
                    value: value.clone(),
                    reason: e.to_string(),
                }),
        })
        .collect()
}
