//! Domain types for the next-train lookup.
//!
//! Routes, stops and directions are immutable values built from catalog
//! responses or from user selections. Direction identifiers are derived from
//! the owning route at construction time, so any `Direction` in hand is
//! consistent with the route it was selected from.

mod clock;
mod direction;
mod error;
mod listing;
mod route;
mod route_type;
mod stop;

pub use clock::{Clock, FixedClock, REFERENCE_TZ, SystemClock};
pub use direction::Direction;
pub use error::DomainError;
pub use listing::Listing;
pub use route::Route;
pub use route_type::{RAIL_ROUTE_TYPES, RouteType, join_route_types};
pub use stop::Stop;
