//! Catalog and prediction provider abstraction.

use std::future::Future;

use crate::domain::{Direction, Listing, Route, RouteType, Stop};
use crate::predict::PredictionRecord;

use super::error::MbtaError;

/// Source of routes, stops and raw predictions.
///
/// This abstraction allows the lookup flow to run against the live API or
/// against fixture data.
pub trait TransitApi {
    /// Routes of the given types, keyed by long name.
    fn routes(
        &self,
        types: &[RouteType],
    ) -> impl Future<Output = Result<Listing<Route>, MbtaError>> + Send;

    /// Stops served by `route`, keyed by stop name.
    fn stops(
        &self,
        route: &Route,
    ) -> impl Future<Output = Result<Listing<Stop>, MbtaError>> + Send;

    /// Prediction records for one route, stop and direction, in API order.
    fn predictions(
        &self,
        route: &Route,
        stop: &Stop,
        direction: &Direction,
    ) -> impl Future<Output = Result<Vec<PredictionRecord>, MbtaError>> + Send;
}
