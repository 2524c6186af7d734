//! The line-item store: an ordered, session-owned list of quote rows.
//!
//! Items have no identity beyond their position. Removal is strictly LIFO,
//! mirroring the add/remove buttons of the composition form, and removing
//! from an empty list is a warning-level no-op that never blocks
//! submission.

use rust_decimal::Decimal;

use crate::domain::quote::LineItem;
use crate::errors::StoreError;

#[derive(Clone, Debug, PartialEq)]
pub enum ItemField {
    Quantity(u32),
    Description(String),
    UnitPrice(Decimal),
}

#[derive(Clone, Debug, PartialEq)]
pub enum RemoveOutcome {
    Removed(LineItem),
    /// The list was already empty. Surface a warning, not an error.
    Empty,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineItemStore {
    items: Vec<LineItem>,
}

impl LineItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a default row (`quantidade` 1, empty description, price 0).
    /// There is no upper bound on list length.
    pub fn add(&mut self) -> &mut LineItem {
        self.items.push(LineItem::default());
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    pub fn remove_last(&mut self) -> RemoveOutcome {
        match self.items.pop() {
            Some(item) => RemoveOutcome::Removed(item),
            None => RemoveOutcome::Empty,
        }
    }

    /// In-place edit of one field of the row at `index`. Values outside the
    /// attribute's domain are rejected without touching the row.
    pub fn update(&mut self, index: usize, field: ItemField) -> Result<(), StoreError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfBounds { index, len })?;

        match field {
            ItemField::Quantity(0) => Err(StoreError::ZeroQuantity),
            ItemField::Quantity(quantidade) => {
                item.quantidade = quantidade;
                Ok(())
            }
            ItemField::Description(descricao) => {
                item.descricao = descricao;
                Ok(())
            }
            ItemField::UnitPrice(preco) if preco < Decimal::ZERO => Err(StoreError::NegativePrice),
            ItemField::UnitPrice(preco) => {
                item.preco_unitario = preco;
                Ok(())
            }
        }
    }

    /// Empties the list. Called after every submission attempt when the
    /// reset-on-failure policy is active, and always on success.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{ItemField, LineItemStore, RemoveOutcome};
    use crate::domain::quote::LineItem;
    use crate::errors::StoreError;

    #[test]
    fn adding_n_items_yields_n_defaults_in_append_order() {
        let mut store = LineItemStore::new();
        for _ in 0..4 {
            store.add();
        }

        assert_eq!(store.len(), 4);
        for item in store.items() {
            assert_eq!(item, &LineItem::default());
        }
    }

    #[test]
    fn remove_drops_only_the_last_item() {
        let mut store = LineItemStore::new();
        store.add();
        store.add();
        store.update(0, ItemField::Description("first".to_string())).expect("index 0 exists");
        store.update(1, ItemField::Description("second".to_string())).expect("index 1 exists");

        let outcome = store.remove_last();
        assert!(matches!(outcome, RemoveOutcome::Removed(item) if item.descricao == "second"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].descricao, "first");
    }

    #[test]
    fn remove_on_empty_store_is_a_warning_no_op() {
        let mut store = LineItemStore::new();
        assert_eq!(store.remove_last(), RemoveOutcome::Empty);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn update_touches_only_the_addressed_field() {
        let mut store = LineItemStore::new();
        store.add();
        store.add();
        store.add();

        store.update(1, ItemField::Quantity(5)).expect("quantity update");
        store
            .update(1, ItemField::UnitPrice(Decimal::new(1250, 2)))
            .expect("unit price update");

        assert_eq!(store.items()[0], LineItem::default());
        assert_eq!(store.items()[2], LineItem::default());
        let edited = &store.items()[1];
        assert_eq!(edited.quantidade, 5);
        assert_eq!(edited.descricao, "");
        assert_eq!(edited.preco_unitario, Decimal::new(1250, 2));
    }

    #[test]
    fn stale_indexes_are_rejected() {
        let mut store = LineItemStore::new();
        store.add();
        let error = store.update(3, ItemField::Quantity(2)).expect_err("index 3 is stale");
        assert_eq!(error, StoreError::IndexOutOfBounds { index: 3, len: 1 });
    }

    #[test]
    fn out_of_domain_values_leave_the_row_unchanged() {
        let mut store = LineItemStore::new();
        store.add();

        let error = store.update(0, ItemField::Quantity(0)).expect_err("quantity 0");
        assert_eq!(error, StoreError::ZeroQuantity);

        let error = store
            .update(0, ItemField::UnitPrice(Decimal::new(-1, 2)))
            .expect_err("negative price");
        assert_eq!(error, StoreError::NegativePrice);

        assert_eq!(store.items()[0], LineItem::default());
    }

    #[test]
    fn clear_empties_the_list() {
        let mut store = LineItemStore::new();
        store.add();
        store.add();
        store.clear();
        assert!(store.is_empty());
    }
}
