use crate::domain::a002_homepage::api::{homepage_store, HttpHomePageStore};
use crate::shared::notifications::NotificationService;
use contracts::domain::a002_homepage::{HomePageContent, HomePageContentStore};
use leptos::prelude::*;
use std::rc::Rc;

/// Last known homepage document, shared by all section pages.
///
/// Starts with the built-in content so the editors have something to show
/// if the backend cannot be reached. Every section saves through the one
/// `store`, which holds the document the writes are built from.
#[derive(Clone, Copy)]
pub struct HomePageState {
    pub content: RwSignal<HomePageContent>,
    pub loading: RwSignal<bool>,
    store: StoredValue<Rc<HttpHomePageStore>, LocalStorage>,
}

impl HomePageState {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new(HomePageContent::default()),
            loading: RwSignal::new(false),
            store: StoredValue::new_local(Rc::new(homepage_store())),
        }
    }

    pub fn store(&self) -> Rc<HttpHomePageStore> {
        self.store.get_value()
    }

    pub fn load(&self, notify: NotificationService) {
        let this = *self;
        let store = self.store();
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match store.get_all().await {
                Ok(content) => this.content.set(content),
                Err(e) => {
                    log::error!("loading homepage failed: {}", e);
                    notify.error("Failed to load homepage data. Using default data.");
                }
            }
            this.loading.set(false);
        });
    }
}

pub fn use_homepage_state() -> HomePageState {
    use_context::<HomePageState>().expect("HomePageState not provided in context")
}
