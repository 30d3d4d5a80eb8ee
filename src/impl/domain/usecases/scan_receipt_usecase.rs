use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::receipt_vision_datasource::ReceiptVisionDatasource,
        repositories::receipts_repository_impl::ReceiptsRepositoryImpl,
    },
    domain::repositories::receipts_repository::ReceiptsRepository,
    entities::{ScannedReceipt, TransactionDraft, TransactionType},
    errors::ReadError,
};

/// Receipt photos are sent as JPEG regardless of the uploaded format.
pub(crate) const RECEIPT_MIME_TYPE: &str = "image/jpeg";

#[async_trait]
pub trait ScanReceiptUsecase: Send + Sync {
    async fn scan_bytes(&self, image: &[u8]) -> Result<TransactionDraft, ServerError>;

    async fn scan_file<P>(&self, path: P) -> Result<TransactionDraft, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ScanReceiptUsecaseImpl<R1>
where
    R1: ReceiptsRepository,
{
    receipts_repository: R1,
}

#[async_trait]
impl<R1> ScanReceiptUsecase for ScanReceiptUsecaseImpl<R1>
where
    R1: ReceiptsRepository,
{
    async fn scan_bytes(&self, image: &[u8]) -> Result<TransactionDraft, ServerError> {
        let receipt = self
            .receipts_repository
            .extract(image, RECEIPT_MIME_TYPE)
            .await?;
        let today = chrono::Local::now().date_naive();
        expense_draft(receipt, image, today)
    }

    async fn scan_file<P>(&self, path: P) -> Result<TransactionDraft, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let image = tokio::fs::read(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.scan_bytes(&image).await
    }
}

impl<DS1> ScanReceiptUsecaseImpl<ReceiptsRepositoryImpl<DS1>>
where
    DS1: ReceiptVisionDatasource,
{
    pub(crate) fn new(vision_datasource: DS1) -> Self {
        ScanReceiptUsecaseImpl {
            receipts_repository: ReceiptsRepositoryImpl::new(vision_datasource),
        }
    }
}

/// Turns an extracted receipt into an expense draft. Receipts without a date
/// are booked on `today`.
fn expense_draft(
    receipt: ScannedReceipt,
    image: &[u8],
    today: NaiveDate,
) -> Result<TransactionDraft, ServerError> {
    let ScannedReceipt {
        merchant,
        date,
        total,
        category,
        items,
    } = receipt;

    let description = format!("{} receipt ({} items)", merchant, items.len());
    let receipt_ref = format!("data:{};base64,{}", RECEIPT_MIME_TYPE, STANDARD.encode(image));

    Ok(
        TransactionDraft::new(date.unwrap_or(today), merchant, total, TransactionType::Expense)?
            .with_category(category)
            .with_description(description)
            .with_receipt_ref(receipt_ref),
    )
}
