use async_trait::async_trait;

use super::errors::ProductError;

/// Port to the external barcode scanner.
///
/// The scanner yields one decoded string per request; the presentation
/// layer feeds it into the record's `barcode` field as-is. Hardware access
/// and permission prompts live behind the implementation.
#[async_trait]
pub trait BarcodeScannerService: Send + Sync {
    async fn scan(&self) -> Result<String, ProductError>;
}
