use chrono::NaiveDate;

use super::transaction::ExpenseCategory;

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLineItem {
    pub name: String,
    pub price: Option<f64>,
}

/// Structured record read off a receipt image, already checked against the
/// extraction schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedReceipt {
    pub merchant: String,
    /// `None` when the receipt showed no date.
    pub date: Option<NaiveDate>,
    pub total: f64,
    pub category: ExpenseCategory,
    pub items: Vec<ReceiptLineItem>,
}
