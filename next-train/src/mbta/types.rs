//! MBTA API response DTOs.
//!
//! These types map directly to the JSON:API documents the v3 API returns.
//! Only the attributes we use are declared; serde ignores the rest.

use serde::Deserialize;

/// A JSON:API collection document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<A> {
    /// Primary data, in the order the API listed it.
    pub data: Vec<Resource<A>>,
}

/// A single JSON:API resource object.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource<A> {
    /// Provider id (e.g. `"Red"`, `"place-alfcl"`).
    pub id: String,

    pub attributes: A,
}

/// Attributes of a `route` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteAttributes {
    /// Full display name (e.g. `"Red Line"`).
    pub long_name: String,

    /// Direction names indexed by direction id. Entries can be null for
    /// routes that only run one way.
    #[serde(default)]
    pub direction_names: Vec<Option<String>>,

    /// GTFS route type code.
    #[serde(rename = "type")]
    pub route_type: Option<u8>,
}

/// Attributes of a `stop` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct StopAttributes {
    pub name: String,
}

/// Attributes of a `prediction` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionAttributes {
    /// Predicted arrival (ISO 8601 with offset). Null when the vehicle is
    /// not expected to arrive, e.g. at the first stop of a trip.
    pub arrival_time: Option<String>,

    /// Free-text status such as `"Stopped 2 stops away"`.
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_routes_document() {
        let json = r#"{
            "data": [{
                "id": "Red",
                "type": "route",
                "attributes": {
                    "long_name": "Red Line",
                    "short_name": "",
                    "direction_names": ["South", "North"],
                    "direction_destinations": ["Ashmont/Braintree", "Alewife"],
                    "type": 1
                },
                "links": {"self": "/routes/Red"}
            }],
            "jsonapi": {"version": "1.0"}
        }"#;

        let doc: Document<RouteAttributes> = serde_json::from_str(json).unwrap();
        assert_eq!(doc.data.len(), 1);
        let route = &doc.data[0];
        assert_eq!(route.id, "Red");
        assert_eq!(route.attributes.long_name, "Red Line");
        assert_eq!(
            route.attributes.direction_names,
            [Some("South".to_string()), Some("North".to_string())]
        );
        assert_eq!(route.attributes.route_type, Some(1));
    }

    #[test]
    fn deserialize_prediction_with_null_arrival() {
        let json = r#"{
            "data": [{
                "id": "prediction-1",
                "type": "prediction",
                "attributes": {
                    "arrival_time": null,
                    "departure_time": "2020-10-21T11:13:37-04:00",
                    "direction_id": 1,
                    "status": "Boarding"
                }
            }]
        }"#;

        let doc: Document<PredictionAttributes> = serde_json::from_str(json).unwrap();
        let attrs = &doc.data[0].attributes;
        assert!(attrs.arrival_time.is_none());
        assert_eq!(attrs.status.as_deref(), Some("Boarding"));
    }

    #[test]
    fn missing_data_is_an_error() {
        let result: Result<Document<StopAttributes>, _> = serde_json::from_str(r#"{"errors": []}"#);
        assert!(result.is_err());
    }
}
