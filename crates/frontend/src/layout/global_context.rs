use crate::layout::tabs::AdminTab;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter holding the active tab
const TAB_PARAM: &str = "tab";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AdminTab>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AdminTab::default()),
        }
    }

    /// Restore the tab from `?tab=` and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(tab) = tab_from_query(&search) {
            self.active.set(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, tab: AdminTab) {
        log::debug!("activate tab '{}'", tab.key());
        self.active.set(tab);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

fn tab_from_query(search: &str) -> Option<AdminTab> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(TAB_PARAM).and_then(|key| AdminTab::from_key(key))
}

fn query_for(tab: AdminTab) -> String {
    let query = serde_qs::to_string(&HashMap::from([(TAB_PARAM, tab.key())])).unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_homepage::SectionKey;

    #[test]
    fn tab_is_read_from_query_string() {
        assert_eq!(
            tab_from_query("?tab=testimonials"),
            Some(AdminTab::Section(SectionKey::Testimonials))
        );
        assert_eq!(tab_from_query("?tab=destinations&x=1"), Some(AdminTab::Destinations));
        assert_eq!(tab_from_query("?tab=unknown"), None);
        assert_eq!(tab_from_query(""), None);
    }

    #[test]
    fn query_written_for_active_tab() {
        assert_eq!(query_for(AdminTab::Overview), "?tab=overview");
        assert_eq!(
            query_for(AdminTab::Section(SectionKey::LatestBlogs)),
            "?tab=latestBlogs"
        );
    }
}
