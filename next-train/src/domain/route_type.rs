//! MBTA route type codes.

use std::fmt;

/// Route type as used by the `filter[type]` query parameter.
///
/// The numeric codes follow the GTFS `route_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteType {
    LightRail,
    HeavyRail,
    CommuterRail,
    Bus,
    Ferry,
}

/// Light and heavy rail: the subway and trolley lines.
pub const RAIL_ROUTE_TYPES: [RouteType; 2] = [RouteType::LightRail, RouteType::HeavyRail];

impl RouteType {
    /// The GTFS numeric code for this route type.
    pub fn code(self) -> u8 {
        match self {
            RouteType::LightRail => 0,
            RouteType::HeavyRail => 1,
            RouteType::CommuterRail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Render route types as a comma-separated filter value (e.g. `"0,1"`).
pub fn join_route_types(types: &[RouteType]) -> String {
    types
        .iter()
        .map(|t| t.code().to_string())
        .collect::<Vec<_>>()
        .join(",")
}
