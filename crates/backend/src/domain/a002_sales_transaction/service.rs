use chrono::Datelike;
use contracts::domain::a002_sales_transaction::{
    round_cents, validate_sale_entry, SaleEntryDto, SaleId, SaleStatus, SaleTransaction,
    SalesFilter, SalesListResponse, SalesTotals,
};
use contracts::domain::common::AggregateId;
use contracts::shared::validation::FieldErrors;

use super::repository::SaleStore;
use crate::shared::format::format_money;
use crate::shared::notifier::Notifier;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SalesError {
    #[error("sale {0} not found")]
    NotFound(SaleId),
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
}

/// Журнал вторичных продаж
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    store: SaleStore,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions(items: Vec<SaleTransaction>) -> Self {
        let mut store = SaleStore::new();
        for sale in items {
            if store.contains(&sale.id) {
                tracing::warn!("Duplicate sale id {} skipped", sale.id);
                continue;
            }
            store.insert(sale);
        }
        Self { store }
    }

    pub fn list_all(&self) -> &[SaleTransaction] {
        self.store.list_all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, id: &SaleId) -> Option<&SaleTransaction> {
        self.store.get_by_id(id)
    }

    /// Записать продажу из формы "Sales Entry".
    ///
    /// Новая запись получает статус `pending`; номер накладной генерируется,
    /// если пользователь его не указал.
    pub fn record(
        &mut self,
        entry: &SaleEntryDto,
        known_products: &[String],
        notifier: &dyn Notifier,
    ) -> Result<SaleTransaction, SalesError> {
        let fields = match validate_sale_entry(entry, known_products) {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!("Sales entry rejected: {}", errors);
                notifier.error("Please fill in all required fields");
                return Err(SalesError::Validation(errors));
            }
        };

        let invoice = match fields.invoice {
            Some(invoice) => invoice,
            None => self.next_invoice_number(fields.date.year()),
        };

        let mut id = SaleId::generate();
        while self.store.contains(&id) {
            id = SaleId::generate();
        }

        let sale = SaleTransaction {
            id,
            date: fields.date,
            invoice,
            distributor: fields.distributor,
            product: fields.product,
            quantity: fields.quantity,
            unit_price: fields.unit_price,
            total_amount: round_cents(f64::from(fields.quantity) * fields.unit_price),
            status: SaleStatus::Pending,
            notes: fields.notes,
        };

        tracing::info!(
            "Sale {} recorded: {} x {} for {} ({})",
            sale.invoice,
            sale.quantity,
            sale.product,
            sale.distributor,
            format_money(sale.total_amount)
        );
        self.store.insert(sale.clone());
        notifier.success("Sales Entry Submitted");
        Ok(sale)
    }

    pub fn set_status(
        &mut self,
        id: &SaleId,
        status: SaleStatus,
        notifier: &dyn Notifier,
    ) -> Result<SaleTransaction, SalesError> {
        let sale = self
            .store
            .get_mut(id)
            .ok_or_else(|| SalesError::NotFound(id.clone()))?;
        sale.status = status;
        let updated = sale.clone();
        tracing::info!("Sale {} marked {}", updated.invoice, status.code());
        notifier.success(&format!(
            "Invoice {} marked as {}",
            updated.invoice,
            status.display_name()
        ));
        Ok(updated)
    }

    /// Отфильтрованные транзакции
    pub fn filtered(&self, filter: &SalesFilter) -> Vec<&SaleTransaction> {
        self.store
            .list_all()
            .iter()
            .filter(|s| filter.matches(s))
            .collect()
    }

    /// Отфильтрованный список с итогами по нему
    pub fn list(&self, filter: &SalesFilter) -> SalesListResponse {
        let items: Vec<SaleTransaction> = self.filtered(filter).into_iter().cloned().collect();
        let totals = SalesTotals {
            shown: items.len(),
            total: self.store.len(),
            total_units: items.iter().map(|s| u64::from(s.quantity)).sum(),
            total_amount: round_cents(items.iter().map(|s| s.total_amount).sum()),
        };
        SalesListResponse { items, totals }
    }

    /// INV-<год>-<номер>, номер - следующий свободный в этом году
    fn next_invoice_number(&self, year: i32) -> String {
        let prefix = format!("INV-{}-", year);
        let mut seq = self
            .store
            .list_all()
            .iter()
            .filter(|s| s.invoice.starts_with(&prefix))
            .count()
            + 1;
        loop {
            let candidate = format!("{}{:03}", prefix, seq);
            if !self.store.invoice_exists(&candidate) {
                return candidate;
            }
            seq += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_sales_transaction::seed::demo_sales;
    use crate::shared::notifier::NoticeCollector;
    use contracts::shared::notice::NoticeKind;

    fn products() -> Vec<String> {
        vec!["Chemical A-301".into(), "Chemical B-205".into()]
    }

    fn entry() -> SaleEntryDto {
        SaleEntryDto {
            date: "2024-01-20".into(),
            distributor: "Beta Trading Co".into(),
            product: "Chemical B-205".into(),
            quantity: "3".into(),
            unit_price: "19.99".into(),
            invoice_number: String::new(),
            notes: "Urgent".into(),
        }
    }

    #[test]
    fn test_seed_totals() {
        let ledger = SalesLedger::with_transactions(demo_sales());
        let list = ledger.list(&SalesFilter::default());
        assert_eq!(list.totals.shown, 5);
        assert_eq!(list.totals.total, 5);
        assert_eq!(list.totals.total_units, 745);
        assert_eq!(list.totals.total_amount, 344300.0);
    }

    #[test]
    fn test_record_assigns_invoice_and_total() {
        let mut ledger = SalesLedger::with_transactions(demo_sales());
        let notifier = NoticeCollector::new();
        let sale = ledger.record(&entry(), &products(), &notifier).unwrap();

        assert_eq!(sale.invoice, "INV-2024-006");
        assert_eq!(sale.total_amount, 59.97);
        assert_eq!(sale.status, SaleStatus::Pending);
        assert_eq!(sale.notes.as_deref(), Some("Urgent"));
        assert_eq!(ledger.len(), 6);
        assert_eq!(
            notifier.drain(),
            vec![contracts::shared::notice::Notice::new(
                NoticeKind::Success,
                "Sales Entry Submitted"
            )]
        );
    }

    #[test]
    fn test_record_keeps_given_invoice() {
        let mut ledger = SalesLedger::new();
        let notifier = NoticeCollector::new();
        let mut dto = entry();
        dto.invoice_number = "INV-X-1".into();
        let sale = ledger.record(&dto, &products(), &notifier).unwrap();
        assert_eq!(sale.invoice, "INV-X-1");
    }

    #[test]
    fn test_invoice_sequence_skips_taken_numbers() {
        let mut ledger = SalesLedger::new();
        let notifier = NoticeCollector::new();
        let mut dto = entry();
        dto.invoice_number = "INV-2024-002".into();
        ledger.record(&dto, &products(), &notifier).unwrap();
        let generated = ledger.record(&entry(), &products(), &notifier).unwrap();
        assert_eq!(generated.invoice, "INV-2024-003");
    }

    #[test]
    fn test_record_invalid_entry() {
        let mut ledger = SalesLedger::new();
        let notifier = NoticeCollector::new();
        let err = ledger
            .record(&SaleEntryDto::default(), &products(), &notifier)
            .unwrap_err();
        assert!(matches!(err, SalesError::Validation(ref e) if e.len() == 5));
        assert!(ledger.is_empty());
        let notices = notifier.drain();
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(notices[0].message, "Please fill in all required fields");
    }

    #[test]
    fn test_filter_list() {
        let ledger = SalesLedger::with_transactions(demo_sales());
        let pending = ledger.list(&SalesFilter {
            status: "pending".into(),
            ..SalesFilter::default()
        });
        assert_eq!(pending.items.len(), 1);
        assert_eq!(pending.items[0].invoice, "INV-2024-003");
        assert_eq!(pending.totals.total, 5);
        assert_eq!(pending.totals.total_amount, 62400.0);

        let by_search = ledger.list(&SalesFilter {
            search: "delta".into(),
            ..SalesFilter::default()
        });
        assert_eq!(by_search.items.len(), 1);

        let none = ledger.list(&SalesFilter {
            search: "zzz".into(),
            ..SalesFilter::default()
        });
        assert!(none.items.is_empty());
        assert_eq!(none.totals.total_units, 0);
    }

    #[test]
    fn test_set_status() {
        let mut ledger = SalesLedger::with_transactions(demo_sales());
        let notifier = NoticeCollector::new();
        let updated = ledger
            .set_status(&SaleId::new("3"), SaleStatus::Completed, &notifier)
            .unwrap();
        assert_eq!(updated.status, SaleStatus::Completed);
        assert_eq!(
            ledger.set_status(&SaleId::new("99"), SaleStatus::Completed, &notifier),
            Err(SalesError::NotFound(SaleId::new("99")))
        );
    }
}
