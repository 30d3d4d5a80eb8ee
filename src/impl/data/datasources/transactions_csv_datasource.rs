use std::{fs, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::{ExpenseCategory, TransactionDraft, TransactionType},
    errors::{InvalidCsv, InvalidCsvContent, ReadError},
};

/// Reads transaction drafts from CSV with the header
/// `date,type,counterparty,amount,category,description`.
pub(crate) trait TransactionsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<TransactionDraft>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<TransactionDraft>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct TransactionsCsvDatasourceImpl;

impl TransactionsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TransactionsCsvDatasource for TransactionsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<TransactionDraft>, ServerError> {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_date = r.get(0).unwrap_or("");
                    let raw_type = r.get(1).unwrap_or("");
                    let raw_counterparty = r.get(2).unwrap_or("");
                    let raw_amount = r.get(3).unwrap_or("");
                    let raw_category = match r.get(4) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_description = match r.get(5) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };

                    // Parse.
                    let date = ISODateModel::from_str(raw_date)?;
                    let tx_type = TransactionType::from_code(raw_type).ok_or_else(|| {
                        InvalidCsvContent::new(&format!(
                            "row {}: unknown transaction type '{}'",
                            i + 1,
                            raw_type
                        ))
                    })?;
                    let amount = AmountModel::from_str(raw_amount)?;

                    // Build.
                    let mut draft =
                        TransactionDraft::new(date.into(), raw_counterparty, amount.into(), tx_type)?;
                    if let Some(category) = raw_category {
                        draft = draft.with_category(ExpenseCategory::coerce(category));
                    }
                    if let Some(description) = raw_description {
                        draft = draft.with_description(description);
                    }
                    Ok(draft)
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<TransactionDraft>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
