// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod receipt_vision_datasource;
        pub(crate) mod transactions_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod gemini_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod receipt_data_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod receipts_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod invoice;
        pub(crate) mod receipt;
        pub(crate) mod tax_config;
        pub(crate) mod tax_summary;
        pub(crate) mod transaction;
    }
    pub(crate) mod logic {
        pub(crate) mod invoice_draft;
        pub(crate) mod invoice_totalizer;
        pub(crate) mod receipt_scanner;
        pub(crate) mod tax_calculator;
        pub(crate) mod transaction_store;
    }
    pub(crate) mod repositories {
        pub(crate) mod receipts_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod scan_receipt_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod invoice_printer;
    pub(crate) mod labels;
    pub(crate) mod tax_summary_fmt;
    pub(crate) mod transactions_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::invoice::*;
        pub use crate::domain::entities::receipt::*;
        pub use crate::domain::entities::tax_config::*;
        pub use crate::domain::entities::tax_summary::*;
        pub use crate::domain::entities::transaction::*;
    }

    pub mod logic {
        pub use crate::domain::logic::invoice_draft::InvoiceDraft;
        pub use crate::domain::logic::invoice_totalizer::invoice_total;
        pub use crate::domain::logic::receipt_scanner::SCAN_FAILED_MESSAGE;
        pub use crate::domain::logic::tax_calculator::calculate_tax;
        pub use crate::domain::logic::transaction_store::TransactionStore;
    }

    pub mod vision {
        pub use crate::data::datasources::receipt_vision_datasource::{
            GeminiVisionDatasource, ReceiptVisionDatasource,
        };
    }

    pub mod format {
        pub use crate::presentation::labels::{category_label, type_label};
        pub use crate::presentation::utils::{format_amount, format_rate};
    }
}
