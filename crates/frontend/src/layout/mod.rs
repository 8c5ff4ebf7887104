use leptos::prelude::*;

/// Application shell: top bar plus a single content region.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |                Content                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="analyzer">
            <TopHeader />
            <main>{children()}</main>
        </div>
    }
}

#[component]
fn TopHeader() -> impl IntoView {
    view! {
        <nav>
            <div class="logo">"Supermarket Analyzer"</div>
            <div class="more">
                <img src="/assets/database.svg" alt="" class="database" />
                <img src="/assets/report.svg" alt="" class="report" />
            </div>
        </nav>
    }
}
