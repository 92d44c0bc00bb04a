use crate::model::{FetchRequest, PricePoint, SourceError};

#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self, req: &FetchRequest) -> Result<Vec<PricePoint>, SourceError>;
}
