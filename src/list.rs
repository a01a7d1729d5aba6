//! Shopping List
//!
//! The ordered collection of line items, at most one per product name.
//! Pure in-memory state: persistence and rendering are side effects applied
//! by the reactive layer after each mutation.

use crate::catalog::Catalog;
use crate::models::LineItem;

/// Ordered line items, unique by product name, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: Vec<LineItem>,
}

impl ShoppingList {
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a product, or bump its quantity if it is already listed.
    ///
    /// For an existing item the stored price stays authoritative; the
    /// supplied price is ignored. Price changes only flow in through
    /// [`ShoppingList::reprice`].
    pub fn add_or_increment(&mut self, name: &str, price: f64) {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => item.quantity += 1,
            None => self.items.push(LineItem {
                name: name.to_string(),
                price,
                quantity: 1,
            }),
        }
    }

    /// Adjust the quantity of the item at `index` by `delta`.
    ///
    /// A quantity dropping to zero or below removes the item. `index` must
    /// be valid: the controls invoking this are rendered against the current
    /// list, so an out-of-range index is a programmer error and panics.
    pub fn change_quantity(&mut self, index: usize, delta: i32) {
        let quantity = self.items[index].quantity as i64 + delta as i64;
        if quantity <= 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity = quantity as u32;
        }
    }

    /// Delete the item at `index` unconditionally. Same index precondition
    /// as [`ShoppingList::change_quantity`].
    pub fn remove(&mut self, index: usize) {
        self.items.remove(index);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Re-snapshot prices after a catalog merge.
    ///
    /// Items found in the catalog take the catalog price; items the catalog
    /// does not know keep their last known price.
    pub fn reprice(&mut self, catalog: &Catalog) {
        for item in &mut self.items {
            if let Some(price) = catalog.price_of(&item.name) {
                item.price = price;
            }
        }
    }

    /// Grand total, recomputed from scratch on every call.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn adding_same_product_twice_increments_quantity() {
        let mut list = ShoppingList::default();
        list.add_or_increment("Молоко 2.5%", 89.0);
        list.add_or_increment("Молоко 2.5%", 89.0);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].quantity, 2);
        assert_eq!(list.total(), 178.0);
    }

    #[test]
    fn existing_item_keeps_stored_price_on_re_add() {
        let mut list = ShoppingList::default();
        list.add_or_increment("Хлеб белый", 40.0);
        // A different supplied price must not overwrite the snapshot.
        list.add_or_increment("Хлеб белый", 99.0);

        assert_eq!(list.items()[0].price, 40.0);
        assert_eq!(list.items()[0].quantity, 2);
    }

    #[test]
    fn insertion_order_survives_increments() {
        let mut list = ShoppingList::default();
        list.add_or_increment("Хлеб белый", 40.0);
        list.add_or_increment("Кефир", 75.0);
        list.add_or_increment("Хлеб белый", 40.0);

        let names: Vec<&str> = list.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Хлеб белый", "Кефир"]);
    }

    #[test]
    fn quantity_dropping_to_zero_removes_item() {
        let mut list = ShoppingList::default();
        list.add_or_increment("Хлеб белый", 40.0);
        list.add_or_increment("Хлеб белый", 40.0);

        list.change_quantity(0, -2);
        assert!(list.is_empty());
        assert_eq!(list.total(), 0.0);
    }

    #[test]
    fn quantity_dropping_below_zero_also_removes_item() {
        let mut list = ShoppingList::default();
        list.add_or_increment("Хлеб белый", 40.0);
        list.change_quantity(0, -6);
        assert!(list.is_empty());
    }

    #[test]
    fn decrement_above_zero_keeps_item() {
        let mut list = ShoppingList::default();
        list.add_or_increment("Кефир", 75.0);
        list.add_or_increment("Кефир", 75.0);
        list.change_quantity(0, -1);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].quantity, 1);
    }

    #[test]
    fn remove_deletes_only_that_index() {
        let mut list = ShoppingList::default();
        list.add_or_increment("Хлеб белый", 40.0);
        list.add_or_increment("Кефир", 75.0);
        list.remove(0);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].name, "Кефир");
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = ShoppingList::default();
        list.add_or_increment("Хлеб белый", 40.0);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn reprice_updates_only_known_names() {
        let mut catalog = Catalog::seed();
        let mut list = ShoppingList::default();
        list.add_or_increment("Хлеб белый", 40.0);
        list.add_or_increment("Самодельный пирог", 250.0);

        let mut updates = BTreeMap::new();
        updates.insert("Хлеб белый".to_string(), 44.0);
        catalog.merge(&updates);
        list.reprice(&catalog);

        assert_eq!(list.items()[0].price, 44.0);
        // Not in the catalog, keeps its last known price.
        assert_eq!(list.items()[1].price, 250.0);
    }

    #[test]
    fn add_then_double_then_drain_scenario() {
        let mut list = ShoppingList::default();

        list.add_or_increment("Хлеб белый", 40.0);
        assert_eq!(list.total(), 40.0);

        list.add_or_increment("Хлеб белый", 40.0);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].quantity, 2);
        assert_eq!(list.total(), 80.0);

        list.change_quantity(0, -2);
        assert!(list.is_empty());
        assert_eq!(list.total(), 0.0);
    }
}
