pub mod banner;
pub mod center;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (main view select, back, all)    |
/// +------------------------------------------+
/// |  Banner                                  |
/// +------------------------------------------+
/// |  Center (remito / cliente / producto /   |
/// |          lista de precios / empty)       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-main">
                <banner::BannerBar />
                <center::Center />
            </div>
        </div>
    }
}
