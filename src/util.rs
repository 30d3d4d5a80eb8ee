use chrono::NaiveDate;
use fractic_server_error::ServerError;
use log::info;

use crate::{
    config::VisionConfig,
    data::{
        datasources::{
            receipt_vision_datasource::{GeminiVisionDatasource, ReceiptVisionDatasource},
            transactions_csv_datasource::{
                TransactionsCsvDatasource as _, TransactionsCsvDatasourceImpl,
            },
        },
        repositories::receipts_repository_impl::ReceiptsRepositoryImpl,
    },
    domain::{
        logic::{
            invoice_draft::InvoiceDraft, receipt_scanner::ReceiptScanner,
            tax_calculator::TaxCalculator, transaction_store::TransactionStore,
        },
        usecases::scan_receipt_usecase::ScanReceiptUsecaseImpl,
    },
    entities::{Jurisdiction, TaxConfig, TaxSummary, Transaction, TransactionDraft},
    ext::sample_data::SAMPLE_TRANSACTIONS_CSV,
    presentation::{
        invoice_printer::InvoicePrinter, tax_summary_fmt::TaxSummaryPrinter,
        transactions_fmt::TransactionsPrinter,
    },
};

/// One user session: the transaction list, the selected tax jurisdiction,
/// the receipt scanner and the invoice being drafted. Nothing outlives the
/// value.
pub struct Dashboard<V>
where
    V: ReceiptVisionDatasource,
{
    store: TransactionStore,
    jurisdiction: Jurisdiction,
    scanner: ReceiptScanner<ScanReceiptUsecaseImpl<ReceiptsRepositoryImpl<V>>>,
    invoice: InvoiceDraft,
    csv_datasource: TransactionsCsvDatasourceImpl,
}

impl Dashboard<GeminiVisionDatasource> {
    /// Dashboard backed by the Gemini vision service, configured from the
    /// environment (see [`VisionConfig::from_env`]).
    pub fn from_env() -> Result<Self, ServerError> {
        Ok(Self::new(GeminiVisionDatasource::new(VisionConfig::from_env()?)?))
    }
}

impl<V> Dashboard<V>
where
    V: ReceiptVisionDatasource,
{
    pub fn new(vision: V) -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            store: TransactionStore::new(),
            jurisdiction: Jurisdiction::default(),
            scanner: ReceiptScanner::new(ScanReceiptUsecaseImpl::new(vision)),
            invoice: InvoiceDraft::new("", today, 1),
            csv_datasource: TransactionsCsvDatasourceImpl::new(),
        }
    }

    /// Dashboard preloaded with the demo transactions.
    pub fn with_sample_data(vision: V) -> Result<Self, ServerError> {
        let mut dashboard = Self::new(vision);
        dashboard.import_csv(SAMPLE_TRANSACTIONS_CSV)?;
        Ok(dashboard)
    }

    // Transactions.
    // ---

    /// All transactions, newest first.
    pub fn transactions(&self) -> impl DoubleEndedIterator<Item = &Transaction> + ExactSizeIterator {
        self.store.iter()
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn add_transaction(&mut self, draft: TransactionDraft) -> &Transaction {
        self.store.add_transaction(draft)
    }

    /// Adds every row of the CSV, in file order. Nothing is added if any row
    /// is invalid. Returns the number of transactions added.
    pub fn import_csv(&mut self, csv: &str) -> Result<usize, ServerError> {
        let drafts = self.csv_datasource.from_string(csv)?;
        Ok(self.add_all(drafts))
    }

    pub fn import_csv_file<P>(&mut self, path: P) -> Result<usize, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let drafts = self.csv_datasource.from_file(path)?;
        Ok(self.add_all(drafts))
    }

    fn add_all(&mut self, drafts: Vec<TransactionDraft>) -> usize {
        let count = drafts.len();
        for draft in drafts {
            self.store.add_transaction(draft);
        }
        count
    }

    // Tax.
    // ---

    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    pub fn set_jurisdiction(&mut self, jurisdiction: Jurisdiction) {
        if jurisdiction != self.jurisdiction {
            info!("Switching jurisdiction to {}.", jurisdiction);
        }
        self.jurisdiction = jurisdiction;
    }

    pub fn toggle_jurisdiction(&mut self) -> Jurisdiction {
        self.set_jurisdiction(self.jurisdiction.toggled());
        self.jurisdiction
    }

    pub fn tax_config(&self) -> &'static TaxConfig {
        self.jurisdiction.config()
    }

    pub fn tax_summary(&self) -> TaxSummary {
        TaxCalculator::new(self.tax_config()).process(self.store.iter())
    }

    // Receipts.
    // ---

    /// Scans a receipt and records the resulting expense.
    pub async fn scan_receipt(&mut self, image: &[u8]) -> Result<&Transaction, ServerError> {
        let draft = self.scanner.scan(image).await?;
        Ok(self.store.add_transaction(draft))
    }

    pub async fn scan_receipt_file<P>(&mut self, path: P) -> Result<&Transaction, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let draft = self.scanner.scan_file(path).await?;
        Ok(self.store.add_transaction(draft))
    }

    /// Scans a receipt without recording it, leaving the dashboard usable
    /// (shared borrow) while the call is in flight. Pass the draft to
    /// [`Dashboard::add_transaction`] once it settles.
    pub async fn scan_receipt_draft(&self, image: &[u8]) -> Result<TransactionDraft, ServerError> {
        self.scanner.scan(image).await
    }

    pub fn is_scanning(&self) -> bool {
        self.scanner.is_scanning()
    }

    pub fn last_scan_error(&self) -> Option<String> {
        self.scanner.last_error()
    }

    // Invoices.
    // ---

    pub fn invoice(&self) -> &InvoiceDraft {
        &self.invoice
    }

    pub fn invoice_mut(&mut self) -> &mut InvoiceDraft {
        &mut self.invoice
    }

    /// Discards the current draft and starts a new one.
    pub fn new_invoice(
        &mut self,
        client_name: impl Into<String>,
        issue_date: NaiveDate,
        sequence: u32,
    ) -> &mut InvoiceDraft {
        self.invoice = InvoiceDraft::new(client_name, issue_date, sequence);
        &mut self.invoice
    }

    // Rendering.
    // ---

    pub fn render_transactions(&self) -> String {
        TransactionsPrinter::new(self.jurisdiction).print(self.store.iter())
    }

    pub fn render_tax_summary(&self) -> String {
        TaxSummaryPrinter::new(self.tax_config()).print(&self.tax_summary())
    }

    pub fn render_invoice(&self) -> String {
        InvoicePrinter::new(self.jurisdiction.currency()).print(self.invoice.invoice())
    }
}
