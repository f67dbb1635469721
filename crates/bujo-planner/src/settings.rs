use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page-count configuration for a generated journal
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    // Calendar units
    pub pages_per_day: usize,

    // Collections
    pub pages_per_collection: usize,
    pub num_collections_per_index: usize,
    pub num_collection_indexes: usize,

    // Front matter
    pub num_guide_pages: usize,
    pub num_future_log_pages: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pages_per_day: 1,
            pages_per_collection: 1,
            num_collections_per_index: 18,
            num_collection_indexes: 2,
            num_guide_pages: 6,
            num_future_log_pages: 4,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let settings = serde_json::from_slice(&bytes)
            .map_err(|e| PlannerError::Config(format!("Failed to parse settings: {}", e)))?;
        Ok(settings)
    }

    /// Save settings to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize settings: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the settings
    ///
    /// Every calendar day and every collection entry must own at least one page.
    pub fn validate(&self) -> Result<()> {
        if self.pages_per_day < 1 {
            return Err(PlannerError::Config(
                "pages_per_day must be at least 1".to_string(),
            ));
        }

        if self.pages_per_collection < 1 {
            return Err(PlannerError::Config(
                "pages_per_collection must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Total number of collection entries across all collection indexes
    pub fn total_collections(&self) -> usize {
        self.num_collections_per_index * self.num_collection_indexes
    }
}
