use crate::models::Property;
use crate::sources::PropertySource;
use anyhow::Result;
use tracing::info;

/// Read-only catalogue of listings, loaded once at startup
///
/// Searches and favourites only ever borrow from it; nothing mutates the
/// collection after load.
pub struct PropertyStore {
    properties: Vec<Property>,
}

impl PropertyStore {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Load the catalogue from a listing source
    pub async fn load(source: &dyn PropertySource) -> Result<Self> {
        let properties = source.load().await?;
        info!(
            "Catalogue ready: {} listings from source '{}'",
            properties.len(),
            source.source_name()
        );
        Ok(Self::new(properties))
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    /// Look up a single listing; an unknown id is `None`, not an error
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
