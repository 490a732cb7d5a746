//! Arrival prediction.
//!
//! Selection of the nearest upcoming arrival is a pure function of the
//! prediction records and the current instant ([`select_nearest_arrival`]).
//! [`Predictor`] wraps it with the fetch and the clock.

mod nearest;
mod predictor;
mod record;

pub use nearest::{Prediction, Unavailable, select_nearest_arrival};
pub use predictor::Predictor;
pub use record::PredictionRecord;
