//! The lookup flow: route, stop, direction, then the nearest arrival.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::info;

use crate::config::ConfigError;
use crate::domain::{Clock, Direction, RAIL_ROUTE_TYPES, Route, Stop};
use crate::mbta::{MbtaError, TransitApi};
use crate::predict::{Prediction, Predictor};
use crate::select::{Menu, SelectionError};

/// Message shown when no arrival can be reported.
pub const UNAVAILABLE_MESSAGE: &str = "Sorry, this stop is unavailable at this time.";

/// Errors that end a lookup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Error creating MBTA client: {0}")]
    Client(#[source] MbtaError),

    #[error("Error retrieving routes: {0}")]
    Routes(#[source] MbtaError),

    #[error("Error retrieving stops: {0}")]
    Stops(#[source] MbtaError),

    #[error("Error retrieving predictions: {0}")]
    Predictions(#[source] MbtaError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Result of one lookup, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub route: Route,
    pub stop: Stop,
    pub direction: Direction,
    pub prediction: Prediction,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Route: {} | Stop: {} | Direction: {}",
            self.route.name(),
            self.stop.name(),
            self.direction.name()
        )?;
        match self.prediction.minutes() {
            Some(minutes) => write!(f, "The train will be arriving in {minutes} minutes"),
            None => f.write_str(UNAVAILABLE_MESSAGE),
        }
    }
}

/// Walk the user through the three selections and report the next arrival.
///
/// The report is written to the menu's output and returned.
pub async fn run<A, C, R, W>(
    predictor: &Predictor<A, C>,
    menu: &mut Menu<R, W>,
) -> Result<Report, AppError>
where
    A: TransitApi,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let routes = predictor
        .api()
        .routes(&RAIL_ROUTE_TYPES)
        .await
        .map_err(AppError::Routes)?;
    info!(count = routes.len(), "loaded routes");
    let route = menu.select_route(&routes)?;

    let stops = predictor
        .api()
        .stops(&route)
        .await
        .map_err(AppError::Stops)?;
    info!(route = route.id(), count = stops.len(), "loaded stops");
    let stop = menu.select_stop(&stops)?;

    let direction = menu.select_direction(&route)?;

    let prediction = predictor
        .predict(&route, &stop, &direction)
        .await
        .map_err(AppError::Predictions)?;
    if let Prediction::Unavailable(reason) = prediction {
        info!(%reason, "no arrival to report");
    }

    let report = Report {
        route,
        stop,
        direction,
        prediction,
    };
    menu.say(format_args!("\n{report}"))?;

    Ok(report)
}
