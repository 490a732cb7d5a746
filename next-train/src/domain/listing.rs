//! Name-keyed listings of catalog entries.

use std::collections::HashMap;

/// Catalog entries keyed by display name, in the order they were listed.
///
/// Users select entries by typing a display name, so the listing is keyed on
/// that. Display names are not guaranteed unique upstream: inserting a name
/// that is already present replaces the earlier value but keeps its position.
///
/// # Examples
///
/// ```
/// use next_train::domain::Listing;
///
/// let mut listing = Listing::new();
/// listing.insert("Alewife", 1);
/// listing.insert("Davis", 2);
/// assert_eq!(listing.insert("Alewife", 3), Some(1));
///
/// assert_eq!(listing.get("Alewife"), Some(&3));
/// assert_eq!(listing.names().collect::<Vec<_>>(), ["Alewife", "Davis"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Listing<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an entry, returning the value it replaced if the name was taken.
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Display names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Listing<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut listing = Listing::new();
        for (name, value) in iter {
            listing.insert(name, value);
        }
        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let listing: Listing<u32> = [("Red Line", 1), ("Orange Line", 2), ("Blue Line", 3)]
            .into_iter()
            .collect();

        assert_eq!(
            listing.names().collect::<Vec<_>>(),
            ["Red Line", "Orange Line", "Blue Line"]
        );
        assert_eq!(listing.get("Orange Line"), Some(&2));
        assert_eq!(listing.len(), 3);
    }

    #[test]
    fn duplicate_name_last_write_wins() {
        let mut listing = Listing::new();
        assert_eq!(listing.insert("Park Street", "a"), None);
        assert_eq!(listing.insert("Downtown Crossing", "b"), None);
        assert_eq!(listing.insert("Park Street", "c"), Some("a"));

        assert_eq!(listing.len(), 2);
        assert_eq!(listing.get("Park Street"), Some(&"c"));
        assert_eq!(
            listing.names().collect::<Vec<_>>(),
            ["Park Street", "Downtown Crossing"]
        );
    }

    #[test]
    fn lookup_misses() {
        let listing: Listing<u32> = Listing::default();
        assert!(listing.is_empty());
        assert!(!listing.contains("Alewife"));
        assert_eq!(listing.get("Alewife"), None);
    }
}
