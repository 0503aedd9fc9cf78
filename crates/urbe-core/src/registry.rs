//! City registry
//!
//! Indexes cities by id in the balanced tree, so registration and lookup
//! stay O(log n) regardless of insertion order. This is the in-process
//! boundary the CLI (or any other front end) calls into; it never prints
//! and never touches the filesystem.

use crate::city::{City, CityId};
use crate::error::{Result, UrbeError};
use crate::tree::{AvlTree, Traversal};

#[derive(Debug, Default)]
pub struct CityRegistry {
    cities: AvlTree<CityId, City>,
}

impl CityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Register a new city. A duplicate id is an explicit error, never a
    /// silent overwrite.
    pub fn register(&mut self, id: CityId, name: &str) -> Result<()> {
        if !self.cities.insert(id, City::new(id, name)) {
            return Err(UrbeError::already_exists("city", id));
        }
        tracing::debug!(id, name, "city_registered");
        Ok(())
    }

    /// Insert an already-built city (used when loading a saved registry).
    pub fn insert(&mut self, city: City) -> Result<()> {
        let id = city.id;
        if !self.cities.insert(id, city) {
            return Err(UrbeError::already_exists("city", id));
        }
        Ok(())
    }

    pub fn get(&self, id: CityId) -> Option<&City> {
        self.cities.get(&id)
    }

    pub fn get_mut(&mut self, id: CityId) -> Option<&mut City> {
        self.cities.get_mut(&id)
    }

    /// Look up a city, converting absence into the data error the front
    /// end reports.
    pub fn require(&self, id: CityId) -> Result<&City> {
        self.get(id).ok_or(UrbeError::CityNotFound { id })
    }

    pub fn require_mut(&mut self, id: CityId) -> Result<&mut City> {
        self.get_mut(id).ok_or(UrbeError::CityNotFound { id })
    }

    pub fn remove(&mut self, id: CityId) -> Result<City> {
        self.cities
            .remove(&id)
            .ok_or(UrbeError::CityNotFound { id })
    }

    /// City ids in the given traversal order.
    pub fn ids(&self, order: Traversal) -> Vec<CityId> {
        self.cities.keys(order)
    }

    /// Cities in ascending id order.
    pub fn cities(&self) -> Vec<&City> {
        self.cities.iter().map(|(_, city)| city).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = CityRegistry::new();
        registry.register(50, "São Paulo").unwrap();
        registry.register(30, "Rio de Janeiro").unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(50).map(|c| c.name.as_str()), Some("São Paulo"));
        assert_eq!(registry.get(99), None);
    }

    #[test]
    fn test_duplicate_id_is_explicit_error() {
        let mut registry = CityRegistry::new();
        registry.register(50, "São Paulo").unwrap();

        let err = registry.register(50, "Impostora").unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(registry.get(50).map(|c| c.name.as_str()), Some("São Paulo"));
    }

    #[test]
    fn test_require_missing_city() {
        let registry = CityRegistry::new();
        let err = registry.require(7).unwrap_err();
        assert!(err.to_string().contains("city not found: 7"));
    }

    #[test]
    fn test_ids_follow_traversal_order() {
        let mut registry = CityRegistry::new();
        for (id, name) in [(50, "a"), (30, "b"), (70, "c"), (10, "d")] {
            registry.register(id, name).unwrap();
        }

        assert_eq!(registry.ids(Traversal::In), vec![10, 30, 50, 70]);
        assert_eq!(registry.ids(Traversal::Pre), vec![50, 30, 10, 70]);
        assert_eq!(registry.ids(Traversal::Post), vec![10, 30, 70, 50]);
    }

    #[test]
    fn test_remove_city() {
        let mut registry = CityRegistry::new();
        registry.register(1, "a").unwrap();

        let removed = registry.remove(1).unwrap();
        assert_eq!(removed.name, "a");
        assert!(registry.is_empty());
        assert!(registry.remove(1).is_err());
    }

    #[test]
    fn test_city_owns_its_graph() {
        let mut registry = CityRegistry::new();
        registry.register(1, "Metrópolis").unwrap();

        let city = registry.require_mut(1).unwrap();
        city.routes.add_edge("Centro", "BairroA", 5.0, false).unwrap();

        assert_eq!(registry.require(1).unwrap().routes.vertex_count(), 2);
    }
}
