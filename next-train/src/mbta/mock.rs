//! Mock MBTA client for running without network access.
//!
//! Loads JSON:API documents from a fixture directory and serves them as if
//! they were live API responses. The layout mirrors the request filters:
//!
//! ```text
//! <dir>/routes.json
//! <dir>/stops/<route id>.json
//! <dir>/predictions/<route id>/<stop id>/<direction id>.json
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Direction, Listing, Route, RouteType, Stop};
use crate::predict::PredictionRecord;

use super::api::TransitApi;
use super::convert::{convert_predictions, convert_routes, convert_stops};
use super::error::MbtaError;
use super::types::{Document, PredictionAttributes, RouteAttributes, StopAttributes};

/// Mock client that serves data from JSON files.
///
/// Fixture files are read on each request, so they can be edited while the
/// program runs.
#[derive(Debug, Clone)]
pub struct MockMbtaClient {
    data_dir: PathBuf,
}

impl MockMbtaClient {
    /// Create a mock client over a fixture directory.
    ///
    /// Fails if the directory does not exist.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, MbtaError> {
        let data_dir = data_dir.as_ref();
        if !data_dir.is_dir() {
            return Err(MbtaError::Fixture {
                path: data_dir.display().to_string(),
                message: "not a directory".to_string(),
            });
        }

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    fn load<A: DeserializeOwned>(&self, relative: &Path) -> Result<Document<A>, MbtaError> {
        let path = self.data_dir.join(relative);
        debug!(path = %path.display(), "loading fixture");

        let body = std::fs::read_to_string(&path).map_err(|e| MbtaError::Fixture {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| MbtaError::json(e, &body))
    }
}

impl TransitApi for MockMbtaClient {
    async fn routes(&self, types: &[RouteType]) -> Result<Listing<Route>, MbtaError> {
        let mut doc: Document<RouteAttributes> = self.load(Path::new("routes.json"))?;

        // Apply the type filter the live API would apply server-side.
        let codes: Vec<u8> = types.iter().map(|t| t.code()).collect();
        doc.data
            .retain(|r| r.attributes.route_type.is_none_or(|t| codes.contains(&t)));

        Ok(convert_routes(&doc))
    }

    async fn stops(&self, route: &Route) -> Result<Listing<Stop>, MbtaError> {
        let relative = Path::new("stops").join(format!("{}.json", route.id()));
        let doc: Document<StopAttributes> = self.load(&relative)?;
        Ok(convert_stops(&doc))
    }

    async fn predictions(
        &self,
        route: &Route,
        stop: &Stop,
        direction: &Direction,
    ) -> Result<Vec<PredictionRecord>, MbtaError> {
        let relative = Path::new("predictions")
            .join(route.id())
            .join(stop.id())
            .join(format!("{}.json", direction.id()));
        let doc: Document<PredictionAttributes> = self.load(&relative)?;
        Ok(convert_predictions(&doc)?)
    }
}
