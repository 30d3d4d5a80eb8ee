use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::ServerError;

use crate::{
    domain::logic::invoice_totalizer::invoice_total,
    entities::{Invoice, InvoiceItem, InvoiceItemField, InvoiceItemId},
    errors::UnknownInvoiceItem,
};

/// An invoice being edited. Lines can be added, edited and removed freely;
/// nothing is persisted.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    invoice: Invoice,
    next_item_id: u64,
}

impl InvoiceDraft {
    /// Starts an empty draft numbered `INV-<year>-<sequence>`.
    pub fn new(client_name: impl Into<String>, issue_date: NaiveDate, sequence: u32) -> Self {
        Self {
            invoice: Invoice {
                number: format!("INV-{}-{:03}", issue_date.year(), sequence),
                client_name: client_name.into(),
                client_email: None,
                issue_date,
                due_date: None,
                items: Vec::new(),
                notes: None,
            },
            next_item_id: 1,
        }
    }

    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.invoice.items
    }

    pub fn set_client_name(&mut self, client_name: impl Into<String>) {
        self.invoice.client_name = client_name.into();
    }

    pub fn set_client_email(&mut self, client_email: Option<String>) {
        self.invoice.client_email = client_email;
    }

    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.invoice.due_date = due_date;
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.invoice.notes = notes;
    }

    /// Appends a blank line (quantity 1, rate 0) and returns its id.
    pub fn add_item(&mut self) -> InvoiceItemId {
        let id = InvoiceItemId(self.next_item_id);
        self.next_item_id += 1;
        self.invoice.items.push(InvoiceItem {
            id,
            description: String::new(),
            quantity: 1.0,
            rate: 0.0,
        });
        id
    }

    pub fn update_item(
        &mut self,
        id: InvoiceItemId,
        field: InvoiceItemField,
    ) -> Result<(), ServerError> {
        let item = self
            .invoice
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| UnknownInvoiceItem::new(id.0))?;
        match field {
            InvoiceItemField::Description(description) => item.description = description,
            InvoiceItemField::Quantity(quantity) => item.quantity = quantity,
            InvoiceItemField::Rate(rate) => item.rate = rate,
        }
        Ok(())
    }

    pub fn remove_item(&mut self, id: InvoiceItemId) -> Option<InvoiceItem> {
        let index = self.invoice.items.iter().position(|item| item.id == id)?;
        Some(self.invoice.items.remove(index))
    }

    pub fn total(&self) -> f64 {
        invoice_total(&self.invoice.items)
    }
}
