use crate::shared::api_utils::api_url;
use contracts::dashboards::d100_store_layout::SeasonalAssociationsResponse;
use contracts::enums::Season;
use gloo_net::http::Request;

/// Fetch the precomputed associations for one season
pub async fn fetch_associations(season: Season) -> Result<SeasonalAssociationsResponse, String> {
    let url = api_url(&format!("/api/associations?season={}", season.number()));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SeasonalAssociationsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
