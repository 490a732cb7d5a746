//! Prediction lookup against a transit API.

use tracing::debug;

use crate::domain::{Clock, Direction, Route, Stop};
use crate::mbta::{MbtaError, TransitApi};

use super::nearest::{Prediction, select_nearest_arrival};

/// Fetches predictions and selects the nearest arrival.
#[derive(Debug, Clone)]
pub struct Predictor<A, C> {
    api: A,
    clock: C,
}

impl<A: TransitApi, C: Clock> Predictor<A, C> {
    pub fn new(api: A, clock: C) -> Self {
        Self { api, clock }
    }

    /// Nearest upcoming arrival for a route, stop and direction.
    ///
    /// Fetch failures are errors; an empty or unusable board is
    /// `Ok(Prediction::Unavailable(_))`.
    pub async fn predict(
        &self,
        route: &Route,
        stop: &Stop,
        direction: &Direction,
    ) -> Result<Prediction, MbtaError> {
        let records = self.api.predictions(route, stop, direction).await?;
        let now = self.clock.now();
        let prediction = select_nearest_arrival(&records, &now);

        debug!(
            route = route.id(),
            stop = stop.id(),
            direction = direction.id(),
            records = records.len(),
            ?prediction,
            "selected nearest arrival"
        );

        Ok(prediction)
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}
