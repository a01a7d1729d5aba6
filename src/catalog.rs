//! Product Catalog
//!
//! Insertion-ordered name→price mapping with substring search.
//! Seeded with the predefined product set; prices can be overwritten
//! wholesale by a merge from the remote feed.

use std::collections::BTreeMap;

use crate::models::CatalogEntry;

/// Maximum number of search results shown in the suggestion panel.
const MAX_RESULTS: usize = 10;

/// Predefined products with initial prices.
const SEED_PRODUCTS: &[(&str, f64)] = &[
    ("Хлеб белый", 40.0),
    ("Хлеб ржаной", 45.0),
    ("Молоко 2.5%", 89.0),
    ("Молоко 3.2%", 95.0),
    ("Яйца С1", 85.0),
    ("Яйца С0", 95.0),
    ("Сыр российский", 320.0),
    ("Сыр голландский", 340.0),
    ("Масло сливочное", 150.0),
    ("Масло подсолнечное", 120.0),
    ("Говядина", 400.0),
    ("Свинина", 380.0),
    ("Курица", 280.0),
    ("Минтай", 350.0),
    ("Треска", 420.0),
    ("Картофель", 45.0),
    ("Морковь", 35.0),
    ("Лук репчатый", 30.0),
    ("Капуста", 25.0),
    ("Огурцы", 180.0),
    ("Помидоры", 220.0),
    ("Яблоки", 130.0),
    ("Бананы", 110.0),
    ("Апельсины", 140.0),
    ("Рис", 90.0),
    ("Гречка", 85.0),
    ("Макароны", 65.0),
    ("Сахар", 55.0),
    ("Соль", 20.0),
    ("Чай черный", 160.0),
    ("Кофе молотый", 450.0),
    ("Печенье", 130.0),
    ("Конфеты", 280.0),
    ("Сметана", 140.0),
    ("Творог", 190.0),
    ("Кефир", 75.0),
];

/// Name→price catalog, iteration order = insertion order.
///
/// At this scale (~36 entries) every lookup is a linear scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Catalog pre-filled with the predefined product set.
    pub fn seed() -> Self {
        Self {
            entries: SEED_PRODUCTS
                .iter()
                .map(|(name, price)| CatalogEntry {
                    name: (*name).to_string(),
                    price: *price,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact-name price lookup.
    pub fn price_of(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.price)
    }

    /// Case-insensitive substring search over product names.
    ///
    /// Names starting with the term sort before names merely containing it;
    /// within each group shorter names come first; ties keep catalog order.
    /// Returns at most [`MAX_RESULTS`] entries. An empty term matches
    /// nothing (the caller hides the panel instead of matching everything).
    pub fn search(&self, term: &str) -> Vec<CatalogEntry> {
        let term = term.to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&term))
            .collect();

        // Stable sort, so catalog order breaks ties.
        matches.sort_by_key(|e| {
            let lower = e.name.to_lowercase();
            (!lower.starts_with(&term), e.name.chars().count())
        });

        matches.into_iter().take(MAX_RESULTS).cloned().collect()
    }

    /// Merge a refreshed price mapping into the catalog.
    ///
    /// Existing names are overwritten, unknown names are appended; no entry
    /// is ever removed. The `BTreeMap` keeps the append order of new names
    /// deterministic.
    pub fn merge(&mut self, updates: &BTreeMap<String, f64>) {
        for (name, price) in updates {
            match self.entries.iter_mut().find(|e| &e.name == name) {
                Some(entry) => entry.price = *price,
                None => self.entries.push(CatalogEntry {
                    name: name.clone(),
                    price: *price,
                }),
            }
        }
    }
}
