//! PageFrame: standard wrapper for every section of the main view.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  `"{entity}--{category}"`, e.g. `"a001_remito--list"`
//!   - `data-page-category`  one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a004_lista_precio--list" category=PAGE_CAT_LIST title="Listado de precios">
//!         <table>...</table>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Section wrapper with a heading.
///
/// Adds the BEM modifier class based on category:
/// - `list`   → `section`
/// - `detail` → `section section--detail`
/// - `nested` → `section section--nested`
/// - `empty`  → `section section--empty`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Section heading.
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "section section--detail",
        PAGE_CAT_NESTED => "section section--nested",
        PAGE_CAT_EMPTY => "section section--empty",
        _ => "section",
    };

    view! {
        <section id=page_id class=class data-page-category=category>
            <h2 class="section__title">{title}</h2>
            {children()}
        </section>
    }
}
