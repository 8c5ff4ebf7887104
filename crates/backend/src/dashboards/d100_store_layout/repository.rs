//! Precomputed associations dataset
//!
//! The association mining runs out of band; this process only loads its
//! season-keyed output once at startup and serves lookups from memory.

use anyhow::Context;
use contracts::dashboards::d100_store_layout::SeasonalAssociationsResponse;
use contracts::enums::Season;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

static DATASET: OnceCell<SeasonalDataset> = OnceCell::new();

/// On-disk layout: season numbers as keys, response bodies as values
#[derive(Debug, Deserialize)]
struct DatasetFile {
    seasons: HashMap<String, SeasonalAssociationsResponse>,
}

#[derive(Debug, Clone)]
pub struct SeasonalDataset {
    by_season: HashMap<Season, SeasonalAssociationsResponse>,
}

impl SeasonalDataset {
    /// Parse the dataset file, rejecting season keys outside 1..=4
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let file: DatasetFile = serde_json::from_str(raw).context("invalid dataset JSON")?;

        let mut by_season = HashMap::new();
        for (key, entry) in file.seasons {
            let number: u8 = key
                .parse()
                .with_context(|| format!("season key is not a number: {:?}", key))?;
            let season = Season::from_number(number)
                .with_context(|| format!("season key out of range: {}", number))?;
            by_season.insert(season, entry);
        }

        Ok(Self { by_season })
    }

    pub fn get(&self, season: Season) -> Option<&SeasonalAssociationsResponse> {
        self.by_season.get(&season)
    }

    pub fn season_count(&self) -> usize {
        self.by_season.len()
    }
}

/// Load the dataset into the process-wide cell; called once at startup
pub fn initialize_dataset(path: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read dataset file: {}", path.display()))?;
    let dataset = SeasonalDataset::from_json(&raw)?;

    tracing::info!(
        "Loaded associations dataset: {} seasons from {}",
        dataset.season_count(),
        path.display()
    );

    DATASET
        .set(dataset)
        .map_err(|_| anyhow::anyhow!("dataset already initialized"))?;
    Ok(())
}

pub fn dataset() -> Option<&'static SeasonalDataset> {
    DATASET.get()
}
