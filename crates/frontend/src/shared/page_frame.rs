//! PageFrame, the root wrapper of every admin tab page.
//!
//! Sets two attributes on the root element:
//!   - `id`                  `"{entity}--{category}"`, e.g. `"a001_destinations--list"`
//!   - `data-page-category`  one of the `PAGE_CAT_*` constants
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_destinations--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

/// Record list with filters
pub const PAGE_CAT_LIST: &str = "list";

/// Edit form of a single record or section
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview cards
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Base CSS class for a category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

/// Page id in the `{entity}--{category}` form
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

#[component]
pub fn PageFrame(
    /// HTML id, see [`page_id`]
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_and_classes() {
        assert_eq!(page_id("a001_destinations", PAGE_CAT_LIST), "a001_destinations--list");
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(page_class("other"), "page");
    }
}
