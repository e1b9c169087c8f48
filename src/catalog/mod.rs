pub mod builtin;
pub mod data_loader;
pub mod ingredient;

pub use data_loader::load_catalog_csv;
pub use ingredient::{Ingredient, IngredientCategory, Nutrients, Unit, UnitClass};

use std::collections::HashMap;

/// Read-only ingredient catalog keyed by identifier (e.g. `"basmati_rice"`).
///
/// Insertion order is preserved so candidate lists, and therefore seeded
/// selections, are reproducible.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<(String, Ingredient)>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_entries(builtin::builtin_entries())
    }

    /// Later entries with a duplicate key replace earlier ones in place.
    pub fn from_entries(entries: Vec<(String, Ingredient)>) -> Self {
        let mut catalog = Catalog {
            entries: Vec::with_capacity(entries.len()),
            index: HashMap::new(),
        };
        for (key, ingredient) in entries {
            match catalog.index.get(&key) {
                Some(&pos) => catalog.entries[pos].1 = ingredient,
                None => {
                    catalog.index.insert(key.clone(), catalog.entries.len());
                    catalog.entries.push((key, ingredient));
                }
            }
        }
        catalog
    }

    pub fn get(&self, key: &str) -> Option<&Ingredient> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Ingredient)> {
        self.entries.iter().map(|(key, ing)| (key.as_str(), ing))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidate ingredients for a structural slot: the preferred keys that
    /// exist in the catalog (in the given order), followed by any other
    /// entries of the same category in catalog order.
    pub fn candidates(&self, preferred_keys: &[&str], category: IngredientCategory) -> Vec<&Ingredient> {
        let mut out: Vec<&Ingredient> = preferred_keys
            .iter()
            .filter_map(|key| self.get(key))
            .collect();
        out.extend(
            self.entries
                .iter()
                .filter(|(key, ing)| ing.category == category && !preferred_keys.contains(&key.as_str()))
                .map(|(_, ing)| ing),
        );
        out
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
