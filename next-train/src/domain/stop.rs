//! Stops on a route.

use std::fmt;

/// A station or platform served by a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stop {
    id: String,
    name: String,
}

impl Stop {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Provider-assigned stop id (e.g. `"place-alfcl"`).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
