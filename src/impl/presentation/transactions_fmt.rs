use crate::entities::{Jurisdiction, Transaction, TransactionType};

use super::{
    labels::{category_label, type_label},
    utils::format_amount,
};

/// Renders the transaction table, one line per transaction.
pub(crate) struct TransactionsPrinter {
    jurisdiction: Jurisdiction,
}

impl TransactionsPrinter {
    pub(crate) fn new(jurisdiction: Jurisdiction) -> Self {
        Self { jurisdiction }
    }

    pub(crate) fn print<'a>(&self, transactions: impl IntoIterator<Item = &'a Transaction>) -> String {
        transactions
            .into_iter()
            .map(|tx| self.print_line(tx))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn print_line(&self, tx: &Transaction) -> String {
        let sign = match tx.tx_type {
            TransactionType::Income => '+',
            TransactionType::Expense => '-',
        };
        let label = match &tx.description {
            Some(d) if tx.counterparty.is_empty() => d.as_str(),
            _ => tx.counterparty.as_str(),
        };
        let category = tx
            .category
            .map(|c| format!("[{}]", category_label(c, self.jurisdiction)))
            .unwrap_or_default();
        format!(
            "{}  {:<24} {:<14} {:<8} {}{}",
            tx.date.format("%Y-%m-%d"),
            label,
            category,
            type_label(tx.tx_type, self.jurisdiction),
            sign,
            format_amount(tx.amount, self.jurisdiction.currency()),
        )
    }
}
