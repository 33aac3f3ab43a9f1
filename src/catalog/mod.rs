//! Fixed, ordered, non-empty item lists loaded once at startup.

mod builtin;

use std::num::NonZeroUsize;
use std::ops::Index;

use thiserror::Error;

pub use builtin::{breeds, characteristics, facts, sounds, Catalogs};

/// Raised when a catalog would be built without any items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog `{0}` must contain at least one item")]
    Empty(&'static str),
}

/// Immutable list of display items. Order is the rotation and display order,
/// and the list can never be empty once constructed.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T> Catalog<T> {
    /// `name` only labels the error when `items` is empty.
    pub fn new(name: &'static str, items: Vec<T>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty(name));
        }
        Ok(Self { items })
    }

    /// Number of items. Non-zero by construction, which is what the rotation
    /// arithmetic relies on.
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }
}

impl<T> Index<usize> for Catalog<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::<String>::new("facts", Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::Empty("facts"));
        assert_eq!(err.to_string(), "catalog `facts` must contain at least one item");
    }

    #[test]
    fn catalog_keeps_insertion_order() {
        let catalog = Catalog::new("letters", vec!['a', 'b', 'c']).unwrap();
        assert_eq!(catalog.len().get(), 3);
        assert_eq!(catalog[0], 'a');
        assert_eq!(catalog.get(2), Some(&'c'));
        assert_eq!(catalog.get(3), None);
        assert_eq!(catalog.iter().collect::<String>(), "abc");
    }

    #[test]
    fn builtin_catalogs_match_the_page() {
        let catalogs = Catalogs::builtin().unwrap();
        assert_eq!(catalogs.breeds.len().get(), 5);
        assert_eq!(catalogs.facts.len().get(), 8);
        assert_eq!(catalogs.breeds[0].name, "Siamese");
        assert_eq!(catalogs.breeds[4].name, "British Shorthair");
        assert!(catalogs
            .breeds
            .iter()
            .all(|breed| breed.popularity_percent <= 100));
        assert_eq!(characteristics().len(), 5);
    }
}
