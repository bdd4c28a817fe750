use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Transient notification above the main view.
#[component]
pub fn BannerBar() -> impl IntoView {
    let view_state = use_app_context().view;

    move || {
        view_state.with(|v| v.banner.clone()).map(|banner| {
            let class = format!("banner banner--{}", banner.variant.as_str());
            view! {
                <div class=class role="alert">
                    <span class="banner__icon">"⚠"</span>
                    <span class="banner__text">{banner.message}</span>
                </div>
            }
        })
    }
}
