use crate::dashboards::d100_store_layout::api;
use crate::dashboards::d100_store_layout::layout_plan::plan_slots;
use crate::dashboards::d100_store_layout::state::{DashboardState, ViewMode};
use crate::dashboards::d100_store_layout::ui::season_picker::SeasonPicker;
use contracts::enums::Season;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pre-rendered chart asset for one season, produced out of band
fn chart_asset_path(season: Season) -> String {
    format!("assets/static/category_counts_{}.png", season.number())
}

/// Store Layout Dashboard component
///
/// Loads the selected season's associations and shows them either as the
/// four-slot store diagram or as the season's pre-rendered chart image.
#[component]
pub fn StoreLayoutDashboard() -> impl IntoView {
    let state = RwSignal::new(DashboardState::new());

    // One fetch per season transition (and one on mount). The memo collapses
    // unrelated state writes, so only an actual season change re-runs the
    // effect. Responses carry the season they were requested for; the state
    // transitions drop any that arrive after the selection moved on.
    let season = Memo::new(move |_| state.with(|s| s.season));

    Effect::new(move |_| {
        let requested = season.get();
        state.update(|s| s.load_started());

        spawn_local(async move {
            match api::fetch_associations(requested).await {
                Ok(response) => {
                    state.update(|s| s.load_succeeded(requested, response));
                }
                Err(err) => {
                    log::error!(
                        "Failed to load associations for {}: {}",
                        requested.display_name(),
                        err
                    );
                    state.update(|s| s.load_failed(requested));
                }
            }
        });
    });

    let on_season_select = Callback::new(move |season: Season| {
        state.update(|s| s.season_changed(season));
    });

    view! {
        <div class="options">
            <div
                class=move || {
                    if state.with(|s| s.view_mode) == ViewMode::Layout {
                        "option active"
                    } else {
                        "option"
                    }
                }
                on:click=move |_| state.update(|s| s.view_mode_changed(ViewMode::Layout))
            >
                "Layout"
            </div>
            <div
                class=move || {
                    if state.with(|s| s.view_mode) == ViewMode::Graphs {
                        "option active"
                    } else {
                        "option"
                    }
                }
                on:click=move |_| state.update(|s| s.view_mode_changed(ViewMode::Graphs))
            >
                "Graphs"
            </div>
        </div>
        <div class="content">
            <SeasonPicker
                selected=Signal::derive(move || state.with(|s| s.season))
                on_select=on_season_select
            />

            {move || {
                if state.with(|s| s.loading && s.categories.is_empty()) {
                    Some(view! {
                        <div class="loading">
                            <span>"Loading associations..."</span>
                        </div>
                    })
                } else {
                    None
                }
            }}

            {move || {
                match state.with(|s| s.view_mode) {
                    ViewMode::Layout => {
                        // Slots are derived, never stored: recomputed from the
                        // current data on every render.
                        let plan = state
                            .with(|s| plan_slots(&s.associations, &s.most_frequent, &s.categories));
                        view! {
                            <div class="layout">
                                // Left section - s1
                                <div class="col">
                                    <div class="s1">{slot_cells(plan.s1, 1)}</div>
                                    <div class="counter">"Counter 1"</div>
                                </div>

                                // Middle section - s2 and s3
                                <div class="col-mid">
                                    <div class="s2">{slot_cells(plan.s2, 5)}</div>
                                    <div class="s3">
                                        <div class="cat7 cat">
                                            {plan.s3.unwrap_or_default()}
                                        </div>
                                    </div>
                                    <div class="entry">"Entry"</div>
                                </div>

                                // Right section - s4
                                <div class="col">
                                    <div class="s4">{slot_cells(plan.s4, 8)}</div>
                                    <div class="counter">"Counter 2"</div>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    ViewMode::Graphs => {
                        let src = state.with(|s| chart_asset_path(s.graph_season));
                        view! {
                            <div class="graphs">
                                <img src=src />
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

/// Render one slot's categories as positioned cells (`cat1`..`cat11`)
fn slot_cells(categories: Vec<String>, first_index: usize) -> impl IntoView {
    categories
        .into_iter()
        .enumerate()
        .map(|(i, cat)| {
            view! { <div class=format!("cat{} cat", first_index + i)>{cat}</div> }
        })
        .collect_view()
}
