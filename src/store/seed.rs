use crate::models::{Profile, Property};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Initial contents of the store, read from a JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl SeedData {
    pub async fn from_file(path: &Path) -> Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;

        let seed: SeedData = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

        info!(
            "Loaded {} profiles and {} properties from {}",
            seed.profiles.len(),
            seed.properties.len(),
            path.display()
        );

        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parses_the_bundled_seed_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/seed.json");
        let seed = SeedData::from_file(&path).await.unwrap();

        assert!(!seed.profiles.is_empty());
        assert!(!seed.properties.is_empty());
        assert!(seed.properties.iter().any(|p| p.published_status));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let result = SeedData::from_file(Path::new("/definitely/not/here.json")).await;
        assert!(result.is_err());
    }
}
