use contracts::enums::Season;
use leptos::prelude::*;

/// Season selection buttons, one per season in display order
#[component]
pub fn SeasonPicker(
    /// Currently selected season
    #[prop(into)]
    selected: Signal<Season>,
    /// Callback invoked with the clicked season
    #[prop(into)]
    on_select: Callback<Season>,
) -> impl IntoView {
    view! {
        <div class="seasons">
            {Season::all()
                .into_iter()
                .map(|season| {
                    view! {
                        <div
                            class=move || {
                                if selected.get() == season { "season active" } else { "season" }
                            }
                            on:click=move |_| on_select.run(season)
                        >
                            {season.display_name()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
