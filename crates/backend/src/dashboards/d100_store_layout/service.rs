use contracts::dashboards::d100_store_layout::SeasonalAssociationsResponse;
use contracts::enums::Season;
use thiserror::Error;

use super::repository;

#[derive(Debug, Error)]
pub enum AssociationsError {
    #[error("associations dataset is not initialized")]
    DatasetUnavailable,
    #[error("no dataset entry for season {}", .0.display_name())]
    SeasonMissing(Season),
}

/// Look up the precomputed associations for one season
pub fn seasonal_associations(
    season: Season,
) -> Result<SeasonalAssociationsResponse, AssociationsError> {
    let dataset = repository::dataset().ok_or(AssociationsError::DatasetUnavailable)?;
    dataset
        .get(season)
        .cloned()
        .ok_or(AssociationsError::SeasonMissing(season))
}
