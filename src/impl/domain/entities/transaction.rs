use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::{InvalidAmount, NegativeAmount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Meals,
    Travel,
    Equipment,
    Software,
    Office,
    Other,
}

/// A recorded income or expense. Created only by the store, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    /// Merchant for expenses, client for income.
    pub counterparty: String,
    pub amount: f64,
    pub tx_type: TransactionType,
    pub category: Option<ExpenseCategory>,
    pub description: Option<String>,
    /// Opaque pointer to the scanned receipt (a data URL for scans).
    pub receipt_ref: Option<String>,
}

/// A transaction that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub(crate) date: NaiveDate,
    pub(crate) counterparty: String,
    pub(crate) amount: f64,
    pub(crate) tx_type: TransactionType,
    pub(crate) category: Option<ExpenseCategory>,
    pub(crate) description: Option<String>,
    pub(crate) receipt_ref: Option<String>,
}

// --

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TransactionType {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Some(TransactionType::Income),
            "EXPENSE" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Meals,
        ExpenseCategory::Travel,
        ExpenseCategory::Equipment,
        ExpenseCategory::Software,
        ExpenseCategory::Office,
        ExpenseCategory::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExpenseCategory::Meals => "Meals",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Equipment => "Equipment",
            ExpenseCategory::Software => "Software",
            ExpenseCategory::Office => "Office",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Maps free-form category text onto the fixed enumeration. Matching
    /// ignores case and surrounding whitespace; anything unrecognized becomes
    /// `Other`.
    pub fn coerce(raw: &str) -> ExpenseCategory {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(raw))
            .unwrap_or(ExpenseCategory::Other)
    }
}

impl TransactionDraft {
    pub fn new(
        date: NaiveDate,
        counterparty: impl Into<String>,
        amount: f64,
        tx_type: TransactionType,
    ) -> Result<Self, ServerError> {
        if !amount.is_finite() {
            return Err(InvalidAmount::new(&amount.to_string()));
        }
        if amount < 0.0 {
            return Err(NegativeAmount::new(amount));
        }
        Ok(Self {
            date,
            counterparty: counterparty.into(),
            amount,
            tx_type,
            category: None,
            description: None,
            receipt_ref: None,
        })
    }

    pub fn income(
        date: NaiveDate,
        client: impl Into<String>,
        amount: f64,
    ) -> Result<Self, ServerError> {
        Self::new(date, client, amount, TransactionType::Income)
    }

    pub fn expense(
        date: NaiveDate,
        merchant: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
    ) -> Result<Self, ServerError> {
        Ok(Self::new(date, merchant, amount, TransactionType::Expense)?.with_category(category))
    }

    pub fn with_category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_receipt_ref(mut self, receipt_ref: impl Into<String>) -> Self {
        self.receipt_ref = Some(receipt_ref.into());
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn tx_type(&self) -> TransactionType {
        self.tx_type
    }

    pub fn category(&self) -> Option<ExpenseCategory> {
        self.category
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn receipt_ref(&self) -> Option<&str> {
        self.receipt_ref.as_deref()
    }

    pub(crate) fn into_transaction(self, id: TransactionId) -> Transaction {
        let TransactionDraft {
            date,
            counterparty,
            amount,
            tx_type,
            category,
            description,
            receipt_ref,
        } = self;
        Transaction {
            id,
            date,
            counterparty,
            amount,
            tx_type,
            category,
            description,
            receipt_ref,
        }
    }
}
