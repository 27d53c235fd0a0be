use contracts::domain::a001_product::{Product, ProductId};

/// In-memory хранилище товаров. Порядок записей - порядок добавления.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductStore {
    items: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_all(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|p| &p.id == id)
    }

    pub fn get_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Добавить в конец. Уникальность id проверяет вызывающий.
    pub fn insert(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Изменить запись на месте; позиция в списке сохраняется
    pub fn get_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.items.iter_mut().find(|p| &p.id == id)
    }

    pub fn delete(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::{ProductFields, StockStatus};

    fn product(id: &str, name: &str) -> Product {
        Product::new_with_id(
            ProductId::new(id),
            ProductFields {
                name: name.into(),
                category: "Additives".into(),
                sku: "CHM-X100".into(),
                unit_price: 10.0,
                stock: StockStatus::InStock,
                monthly_sales: 1,
                trend: 0.0,
            },
        )
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut store = ProductStore::new();
        store.insert(product("a", "One"));
        store.insert(product("b", "Two"));
        store.insert(product("c", "Three"));
        let ids: Vec<&str> = store.list_all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(store.position(&ProductId::new("c")), Some(2));
    }

    #[test]
    fn test_delete_missing_is_none() {
        let mut store = ProductStore::new();
        store.insert(product("a", "One"));
        assert!(store.delete(&ProductId::new("zzz")).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.delete(&ProductId::new("a")).map(|p| p.name), Some("One".into()));
        assert!(store.is_empty());
    }
}
