//! Travel directions.

use std::fmt;

use super::{DomainError, Route};

/// One of a route's two travel directions.
///
/// The identifier is the position of the direction's name in the owning
/// route's direction list, rendered in base 10. This type can only be built
/// from a route, so the identifier always agrees with that route.
///
/// # Examples
///
/// ```
/// use next_train::domain::{Direction, Route};
///
/// let red = Route::new("Red", "Red Line", ["South", "North"]);
/// let north = Direction::from_route(&red, "North").unwrap();
/// assert_eq!(north.id(), "1");
/// assert_eq!(north.name(), "North");
///
/// assert!(Direction::from_route(&red, "East").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Direction {
    id: String,
    name: String,
}

impl Direction {
    /// Resolve a direction name against a route.
    pub fn from_route(route: &Route, name: &str) -> Result<Self, DomainError> {
        let index = route
            .direction_index(name)
            .ok_or_else(|| DomainError::UnknownDirection {
                route: route.id().to_string(),
                name: name.to_string(),
            })?;

        Ok(Self {
            id: index.to_string(),
            name: name.to_string(),
        })
    }

    /// Direction id as sent to the predictions endpoint (`"0"` or `"1"`).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The id always round-trips to the name's position in the route
        #[test]
        fn id_matches_position(
            names in proptest::collection::hash_set("[A-Za-z]{1,12}", 2..6),
            pick in any::<prop::sample::Index>(),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let route = Route::new("R", "Route", names.clone());
            let i = pick.index(names.len());

            let direction = Direction::from_route(&route, &names[i]).unwrap();
            prop_assert_eq!(direction.id(), i.to_string());
            prop_assert_eq!(direction.id().parse::<usize>().unwrap(), i);
        }
    }
}
