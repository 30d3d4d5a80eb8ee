use std::str::FromStr as _;

use fractic_server_error::ServerError;
use serde_derive::Deserialize;

use crate::{
    entities::{ExpenseCategory, ReceiptLineItem, ScannedReceipt},
    errors::ExtractionError,
};

use super::iso_date_model::ISODateModel;

/// Record the vision service is instructed to return. `merchant`, `total`
/// and `category` are mandatory; everything else may be missing.
#[derive(Debug, Deserialize)]
pub(crate) struct ReceiptDataModel {
    pub merchant: String,
    #[serde(default)]
    pub date: Option<String>,
    pub total: f64,
    pub category: String,
    #[serde(default)]
    pub items: Option<Vec<ReceiptItemModel>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReceiptItemModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl TryFrom<ReceiptDataModel> for ScannedReceipt {
    type Error = ServerError;

    fn try_from(model: ReceiptDataModel) -> Result<Self, Self::Error> {
        let ReceiptDataModel {
            merchant,
            date,
            total,
            category,
            items,
        } = model;

        if total < 0.0 {
            return Err(ExtractionError::new(&format!("negative total {}", total)));
        }
        let date = match date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                ISODateModel::from_str(raw)
                    .map_err(|e| ExtractionError::with_debug("malformed date", &e))?
                    .into(),
            ),
        };

        Ok(ScannedReceipt {
            merchant,
            date,
            total,
            category: ExpenseCategory::coerce(&category),
            items: items
                .unwrap_or_default()
                .into_iter()
                .map(|i| ReceiptLineItem {
                    name: i.name.unwrap_or_default(),
                    price: i.price,
                })
                .collect(),
        })
    }
}
