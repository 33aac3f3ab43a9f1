use rand::Rng;

use crate::catalog::Catalog;

/// Draws facts uniformly, with replacement, from a fixed catalog and keeps the
/// most recent draw for display.
#[derive(Debug, Clone)]
pub struct FactPicker {
    catalog: Catalog<String>,
    current: Option<usize>,
}

impl FactPicker {
    pub fn new(catalog: Catalog<String>) -> Self {
        Self {
            catalog,
            current: None,
        }
    }

    /// Replace the current fact with a fresh draw from `rng`. Consecutive
    /// draws may return the same fact.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.catalog.len().get());
        self.current = Some(index);
        &self.catalog[index]
    }

    /// The last generated fact, or `None` before the first draw.
    pub fn current(&self) -> Option<&str> {
        self.current.map(|index| self.catalog[index].as_str())
    }

    pub fn catalog(&self) -> &Catalog<String> {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::facts;

    #[test]
    fn starts_unset() {
        let picker = FactPicker::new(facts().unwrap());
        assert_eq!(picker.current(), None);
    }

    #[test]
    fn thousand_draws_stay_in_catalog() {
        let mut picker = FactPicker::new(facts().unwrap());
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let fact = picker.generate(&mut rng).to_string();
            assert!(picker.catalog().contains(&fact));
            assert_eq!(picker.current(), Some(fact.as_str()));
            seen.insert(fact);
        }
        // 1000 uniform draws over 8 facts reach every one of them.
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut left = FactPicker::new(facts().unwrap());
        let mut right = FactPicker::new(facts().unwrap());
        let mut left_rng = StdRng::seed_from_u64(42);
        let mut right_rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(
                left.generate(&mut left_rng).to_string(),
                right.generate(&mut right_rng)
            );
        }
    }

    #[test]
    fn single_fact_catalog_always_returns_it() {
        let catalog = Catalog::new("facts", vec!["Cats purr.".to_string()]).unwrap();
        let mut picker = FactPicker::new(catalog);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(picker.generate(&mut rng), "Cats purr.");
        }
    }
}
