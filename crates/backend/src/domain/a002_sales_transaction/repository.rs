use contracts::domain::a002_sales_transaction::{SaleId, SaleTransaction};

/// In-memory журнал продаж в порядке записи
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleStore {
    items: Vec<SaleTransaction>,
}

impl SaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_all(&self) -> &[SaleTransaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_by_id(&self, id: &SaleId) -> Option<&SaleTransaction> {
        self.items.iter().find(|s| &s.id == id)
    }

    pub fn get_mut(&mut self, id: &SaleId) -> Option<&mut SaleTransaction> {
        self.items.iter_mut().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &SaleId) -> bool {
        self.get_by_id(id).is_some()
    }

    pub fn invoice_exists(&self, invoice: &str) -> bool {
        self.items.iter().any(|s| s.invoice == invoice)
    }

    pub fn insert(&mut self, sale: SaleTransaction) {
        self.items.push(sale);
    }
}
