use eyre::Result;

#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    type Item;

    async fn apply(&self, item: &Self::Item) -> Result<()>;
}
