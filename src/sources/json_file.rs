use crate::models::Property;
use crate::sources::traits::PropertySource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Listing source backed by a JSON file on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PropertySource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Property>> {
        debug!("Reading listings from {:?}", self.path);

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read listings file {:?}", self.path))?;

        let properties: Vec<Property> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse listings file {:?}", self.path))?;

        info!("Loaded {} listings from {:?}", properties.len(), self.path);
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

/// Listing source for the sample dataset shipped with the binary
pub struct BundledSource;

const BUNDLED_LISTINGS: &str = include_str!("../../data/properties.json");

#[async_trait]
impl PropertySource for BundledSource {
    async fn load(&self) -> Result<Vec<Property>> {
        let properties: Vec<Property> =
            serde_json::from_str(BUNDLED_LISTINGS).context("Failed to parse bundled listings")?;
        debug!("Loaded {} bundled listings", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "bundled"
    }
}
