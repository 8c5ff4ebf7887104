use crate::dashboards::d100_store_layout::ui::StoreLayoutDashboard;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell>
            <StoreLayoutDashboard />
        </Shell>
    }
}
