use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InvoiceItemId(pub(crate) u64);

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceItem {
    pub id: InvoiceItemId,
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
}

/// A single editable field of an invoice line.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceItemField {
    Description(String),
    Quantity(f64),
    Rate(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub number: String,
    pub client_name: String,
    pub client_email: Option<String>,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub items: Vec<InvoiceItem>,
    pub notes: Option<String>,
}

// --

impl std::fmt::Display for InvoiceItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl InvoiceItem {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.rate
    }
}
