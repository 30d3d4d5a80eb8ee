use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::receipt_vision_datasource::ReceiptVisionDatasource,
        models::receipt_data_model::ReceiptDataModel,
    },
    domain::repositories::receipts_repository::ReceiptsRepository,
    entities::ScannedReceipt,
    errors::ExtractionError,
};

pub(crate) struct ReceiptsRepositoryImpl<DS1>
where
    DS1: ReceiptVisionDatasource,
{
    vision_datasource: DS1,
}

#[async_trait]
impl<DS1> ReceiptsRepository for ReceiptsRepositoryImpl<DS1>
where
    DS1: ReceiptVisionDatasource,
{
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<ScannedReceipt, ServerError> {
        let raw = self.vision_datasource.extract(image, mime_type).await?;
        let model: ReceiptDataModel = serde_json::from_str(&raw)
            .map_err(|e| ExtractionError::with_debug("response does not match receipt schema", &e))?;
        model.try_into()
    }
}

impl<DS1> ReceiptsRepositoryImpl<DS1>
where
    DS1: ReceiptVisionDatasource,
{
    pub(crate) fn new(vision_datasource: DS1) -> Self {
        ReceiptsRepositoryImpl { vision_datasource }
    }

    #[cfg(test)]
    pub(crate) fn datasource(&self) -> &DS1 {
        &self.vision_datasource
    }
}
