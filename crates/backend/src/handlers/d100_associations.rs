use axum::{extract::Query, http::StatusCode, Json};
use serde::Deserialize;

use contracts::dashboards::d100_store_layout::SeasonalAssociationsResponse;
use contracts::enums::Season;

use crate::dashboards::d100_store_layout::service;

#[derive(Deserialize)]
pub struct AssociationsParams {
    pub season: u8,
}

pub async fn get_associations(
    Query(params): Query<AssociationsParams>,
) -> Result<Json<SeasonalAssociationsResponse>, StatusCode> {
    let season = Season::from_number(params.season).ok_or(StatusCode::BAD_REQUEST)?;

    match service::seasonal_associations(season) {
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            tracing::error!(
                "Failed to load associations for season {}: {}",
                params.season,
                e
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
