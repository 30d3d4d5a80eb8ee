use log::debug;

use crate::entities::{Transaction, TransactionDraft, TransactionId};

/// Session-scoped, append-only list of transactions.
///
/// Transactions are kept in insertion order internally and handed out newest
/// first. Ids come from a per-store counter and are never reused.
#[derive(Debug)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add_transaction(&mut self, draft: TransactionDraft) -> &Transaction {
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        debug!(
            "Adding {} transaction {} ({}, {}).",
            draft.tx_type.code(),
            id,
            draft.counterparty,
            draft.amount
        );
        self.transactions.push(draft.into_transaction(id));
        &self.transactions[self.transactions.len() - 1]
    }

    /// All transactions, newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Transaction> + ExactSizeIterator {
        self.transactions.iter().rev()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}
