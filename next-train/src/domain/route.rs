//! Transit routes.

use std::fmt;

/// A single transit line with its two travel directions.
///
/// The direction list is ordered: index 0 and index 1 are the provider's
/// direction ids for the two opposite travel directions.
///
/// # Examples
///
/// ```
/// use next_train::domain::Route;
///
/// let red = Route::new("Red", "Red Line", ["South", "North"]);
/// assert_eq!(red.id(), "Red");
/// assert_eq!(red.direction_names(), ["South", "North"]);
/// assert_eq!(red, Route::new("Red", "Red Line", ["South", "North"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    id: String,
    name: String,
    directions: Vec<String>,
}

impl Route {
    /// Create a route from its provider id, display name and direction names.
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, directions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            directions: directions.into_iter().map(Into::into).collect(),
        }
    }

    /// Provider-assigned route id (e.g. `"Red"`, `"Green-B"`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name (e.g. `"Red Line"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direction names in provider order.
    pub fn direction_names(&self) -> &[String] {
        &self.directions
    }

    /// Position of a direction name in this route's direction list.
    pub fn direction_index(&self, name: &str) -> Option<usize> {
        self.directions.iter().position(|d| d == name)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
