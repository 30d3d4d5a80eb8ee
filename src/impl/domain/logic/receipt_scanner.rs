use std::{
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use fractic_server_error::ServerError;
use log::{info, warn};

use crate::{domain::usecases::scan_receipt_usecase::ScanReceiptUsecase, entities::TransactionDraft};

/// Shown to the user whenever a scan fails, whatever the cause.
pub const SCAN_FAILED_MESSAGE: &str = "Failed to process the receipt. Please try again.";

/// Front end of the receipt scan flow.
///
/// Tracks whether a scan is in flight and the message of the last failure.
/// Scans are not queued, deduplicated, retried or timed out. When several run
/// at once, the first one to settle clears the flag while the others are
/// still pending.
pub struct ReceiptScanner<U: ScanReceiptUsecase> {
    usecase: U,
    scanning: AtomicBool,
    last_error: Mutex<Option<String>>,
}

impl<U: ScanReceiptUsecase> ReceiptScanner<U> {
    pub(crate) fn new(usecase: U) -> Self {
        Self {
            usecase,
            scanning: AtomicBool::new(false),
            last_error: Mutex::new(None),
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning.load(Ordering::SeqCst)
    }

    /// User-facing message of the most recent failed scan, cleared when the
    /// next scan starts.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().ok().and_then(|e| e.clone())
    }

    pub async fn scan(&self, image: &[u8]) -> Result<TransactionDraft, ServerError> {
        info!("Scanning receipt ({} bytes).", image.len());
        self.run(self.usecase.scan_bytes(image)).await
    }

    pub async fn scan_file<P>(&self, path: P) -> Result<TransactionDraft, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        info!("Scanning receipt file {}.", path.as_ref().display());
        self.run(self.usecase.scan_file(path)).await
    }

    async fn run(
        &self,
        scan: impl Future<Output = Result<TransactionDraft, ServerError>>,
    ) -> Result<TransactionDraft, ServerError> {
        self.scanning.store(true, Ordering::SeqCst);
        // Clears the flag even if the caller drops this future mid-scan.
        let _scanning = ScanningGuard(&self.scanning);
        self.set_error(None);

        let result = scan.await;

        match &result {
            Ok(draft) => info!("Receipt scanned: {}.", draft.counterparty()),
            Err(e) => {
                warn!("Receipt scan failed: {:?}", e);
                self.set_error(Some(SCAN_FAILED_MESSAGE.to_string()));
            }
        }
        result
    }

    fn set_error(&self, error: Option<String>) {
        if let Ok(mut last_error) = self.last_error.lock() {
            *last_error = error;
        }
    }
}

struct ScanningGuard<'a>(&'a AtomicBool);

impl Drop for ScanningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
