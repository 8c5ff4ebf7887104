use contracts::dashboards::d100_store_layout::{AssociationPair, SeasonalAssociationsResponse};
use contracts::enums::Season;

/// The two mutually exclusive content modes of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Layout,
    Graphs,
}

/// Dashboard state, mutated only through the transition methods below.
///
/// One logical writer: the component owns the state in a single signal, the
/// fetch task funnels its outcome through `load_succeeded`/`load_failed`.
/// A successful load replaces associations, most frequent category and the
/// category list together; partial updates never happen.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub season: Season,
    pub view_mode: ViewMode,
    pub graph_season: Season,
    pub associations: Vec<AssociationPair>,
    pub most_frequent: String,
    pub categories: Vec<String>,
    pub loading: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            season: Season::Spring,
            view_mode: ViewMode::Layout,
            graph_season: Season::Spring,
            associations: Vec::new(),
            most_frequent: String::new(),
            categories: Vec::new(),
            loading: true,
        }
    }

    /// Select a season; the chart index follows the selection
    pub fn season_changed(&mut self, season: Season) {
        self.season = season;
        self.graph_season = season;
    }

    pub fn view_mode_changed(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn graph_changed(&mut self, season: Season) {
        self.graph_season = season;
    }

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    /// Apply a resolved fetch, unless the selection moved on meanwhile.
    ///
    /// `requested` is the season the request was issued for. A response for a
    /// superseded season is dropped whole; the in-flight request for the
    /// current season keeps ownership of the loading flag.
    pub fn load_succeeded(&mut self, requested: Season, response: SeasonalAssociationsResponse) {
        if requested != self.season {
            return;
        }
        self.associations = response.associations;
        self.most_frequent = response.most_frequent_item;
        self.categories = response.categories;
        self.loading = false;
    }

    /// Record a failed fetch: prior data stays, the loading flag clears.
    /// Stale failures are dropped like stale successes.
    pub fn load_failed(&mut self, requested: Season) {
        if requested != self.season {
            return;
        }
        self.loading = false;
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> SeasonalAssociationsResponse {
        SeasonalAssociationsResponse {
            associations: vec![AssociationPair("Dairy".into(), "Bakery".into())],
            most_frequent_item: "Dairy".into(),
            categories: vec!["Dairy".into(), "Bakery".into(), "Meat".into()],
        }
    }

    #[test]
    fn test_initial_state() {
        let state = DashboardState::new();
        assert_eq!(state.season, Season::Spring);
        assert_eq!(state.view_mode, ViewMode::Layout);
        assert!(state.loading);
        assert!(state.categories.is_empty());
    }

    #[test]
    fn test_success_replaces_data_wholesale() {
        let mut state = DashboardState::new();
        state.load_succeeded(Season::Spring, sample_response());

        assert_eq!(state.most_frequent, "Dairy");
        assert_eq!(state.associations.len(), 1);
        assert_eq!(state.categories.len(), 3);
        assert!(!state.loading);

        // the next load replaces everything, no merging
        state.load_started();
        state.load_succeeded(
            Season::Spring,
            SeasonalAssociationsResponse {
                associations: vec![],
                most_frequent_item: "Snacks".into(),
                categories: vec!["Snacks".into()],
            },
        );
        assert!(state.associations.is_empty());
        assert_eq!(state.most_frequent, "Snacks");
        assert_eq!(state.categories, vec!["Snacks".to_string()]);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut state = DashboardState::new();
        state.load_succeeded(Season::Spring, sample_response());

        // user moves on to Autumn before the Summer request resolves
        state.season_changed(Season::Summer);
        state.load_started();
        state.season_changed(Season::Autumn);
        state.load_started();

        let before = state.clone();
        state.load_succeeded(Season::Summer, SeasonalAssociationsResponse::default());

        // stale data dropped, loading still owned by the Autumn request
        assert_eq!(state, before);
        assert!(state.loading);
    }

    #[test]
    fn test_failure_keeps_prior_data() {
        let mut state = DashboardState::new();
        state.load_succeeded(Season::Spring, sample_response());

        state.season_changed(Season::Winter);
        state.load_started();
        state.load_failed(Season::Winter);

        assert!(!state.loading);
        assert_eq!(state.most_frequent, "Dairy");
        assert_eq!(state.categories.len(), 3);
    }

    #[test]
    fn test_stale_failure_keeps_loading() {
        let mut state = DashboardState::new();
        state.season_changed(Season::Summer);
        state.load_started();
        state.season_changed(Season::Winter);
        state.load_started();

        state.load_failed(Season::Summer);
        assert!(state.loading);
    }

    #[test]
    fn test_season_change_moves_chart_index() {
        let mut state = DashboardState::new();
        state.season_changed(Season::Autumn);
        assert_eq!(state.graph_season, Season::Autumn);

        state.graph_changed(Season::Winter);
        assert_eq!(state.graph_season, Season::Winter);
        assert_eq!(state.season, Season::Autumn);
    }

    #[test]
    fn test_view_mode_toggle() {
        let mut state = DashboardState::new();
        state.view_mode_changed(ViewMode::Graphs);
        assert_eq!(state.view_mode, ViewMode::Graphs);
        state.view_mode_changed(ViewMode::Layout);
        assert_eq!(state.view_mode, ViewMode::Layout);
    }
}
