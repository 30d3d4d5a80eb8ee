use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::ScannedReceipt;

#[async_trait]
pub trait ReceiptsRepository: Send + Sync {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<ScannedReceipt, ServerError>;
}
