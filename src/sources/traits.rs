use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing sources
/// This allows easy addition of new sources (files, feeds, etc) in the future
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Load the full set of listings from the source
    async fn load(&self) -> Result<Vec<Property>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
