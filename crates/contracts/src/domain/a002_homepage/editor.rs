//! Per-section edit cycle of the homepage editor.
//!
//! ```text
//! Viewing --begin_edit--> Editing --begin_save--> Saving
//!    ^                       |  ^                    |
//!    +-------cancel----------+  +--finish_save(Err)--+
//!    +-------------------finish_save(Ok)-------------+
//! ```
//!
//! Edits only touch the buffer. The stored value changes only after the
//! store has accepted the buffer.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use thiserror::Error;

use super::section::{HomePageSection, SectionKey};
use super::store::HomePageContentStore;
use crate::shared::AdminError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorState {
    #[default]
    Viewing,
    Editing,
    Saving,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Section is not being edited")]
    NotEditing,

    #[error("Section is already being edited")]
    AlreadyEditing,

    #[error("A save is already in progress")]
    SaveInProgress,

    #[error("No save is in progress")]
    NotSaving,

    #[error(transparent)]
    Store(#[from] AdminError),
}

/// Message shown when the store rejects a section
pub fn save_failed_message(key: SectionKey) -> String {
    format!("Failed to update {}. Please try again.", key.label())
}

/// Drive one save of a section whose editor lives elsewhere (a signal in
/// the panel, a plain value in `SectionEditor::save`).
///
/// `begin` is `SectionEditor::begin_save` and `finish` is
/// `SectionEditor::finish_save` on that editor. Returns the saved value.
pub async fn save_section<T, S>(
    store: &S,
    begin: impl FnOnce() -> Result<T, EditorError>,
    finish: impl FnOnce(Result<(), String>) -> Result<(), EditorError>,
) -> Result<T, EditorError>
where
    T: HomePageSection,
    S: HomePageContentStore + ?Sized,
{
    let payload = begin()?;
    match store.update(T::KEY, payload.clone().into_value()).await {
        Ok(()) => {
            log::debug!("saved homepage section {}", T::KEY);
            finish(Ok(()))?;
            Ok(payload)
        }
        Err(e) => {
            log::warn!("saving homepage section {} failed: {}", T::KEY, e);
            finish(Err(save_failed_message(T::KEY)))?;
            Err(EditorError::Store(e))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionEditor<T: HomePageSection> {
    stored: T,
    buffer: Option<T>,
    state: EditorState,
    error: Option<String>,
}

impl<T: HomePageSection> Default for SectionEditor<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: HomePageSection> SectionEditor<T> {
    pub fn new(stored: T) -> Self {
        Self {
            stored,
            buffer: None,
            state: EditorState::Viewing,
            error: None,
        }
    }

    pub fn key(&self) -> SectionKey {
        T::KEY
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == EditorState::Editing
    }

    pub fn is_saving(&self) -> bool {
        self.state == EditorState::Saving
    }

    /// Last value accepted by the store
    pub fn stored(&self) -> &T {
        &self.stored
    }

    pub fn buffer(&self) -> Option<&T> {
        self.buffer.as_ref()
    }

    /// What the form shows: the buffer while editing, else the stored value
    pub fn current(&self) -> &T {
        self.buffer.as_ref().unwrap_or(&self.stored)
    }

    /// Error of the last failed save, cleared by the next transition
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_edit(&mut self) -> Result<(), EditorError> {
        match self.state {
            EditorState::Viewing => {
                self.buffer = Some(self.stored.clone());
                self.state = EditorState::Editing;
                self.error = None;
                Ok(())
            }
            EditorState::Editing => Err(EditorError::AlreadyEditing),
            EditorState::Saving => Err(EditorError::SaveInProgress),
        }
    }

    pub fn edit<F>(&mut self, f: F) -> Result<(), EditorError>
    where
        F: FnOnce(&mut T),
    {
        if self.state != EditorState::Editing {
            return Err(self.not_editing());
        }
        match self.buffer.as_mut() {
            Some(buffer) => {
                f(buffer);
                Ok(())
            }
            None => Err(EditorError::NotEditing),
        }
    }

    /// Enter `Saving` and hand out the payload for the store
    pub fn begin_save(&mut self) -> Result<T, EditorError> {
        if self.state != EditorState::Editing {
            return Err(self.not_editing());
        }
        let payload = self.buffer.clone().ok_or(EditorError::NotEditing)?;
        self.state = EditorState::Saving;
        self.error = None;
        Ok(payload)
    }

    /// Apply the store's answer to the save started by `begin_save`
    pub fn finish_save(&mut self, outcome: Result<(), String>) -> Result<(), EditorError> {
        if self.state != EditorState::Saving {
            return Err(EditorError::NotSaving);
        }
        match outcome {
            Ok(()) => {
                if let Some(buffer) = self.buffer.take() {
                    self.stored = buffer;
                }
                self.state = EditorState::Viewing;
                self.error = None;
            }
            Err(message) => {
                self.state = EditorState::Editing;
                self.error = Some(message);
            }
        }
        Ok(())
    }

    /// Drop the buffer and go back to `Viewing`
    pub fn cancel(&mut self) -> Result<(), EditorError> {
        match self.state {
            EditorState::Saving => Err(EditorError::SaveInProgress),
            EditorState::Viewing | EditorState::Editing => {
                self.buffer = None;
                self.state = EditorState::Viewing;
                self.error = None;
                Ok(())
            }
        }
    }

    /// Replace the stored value after a fresh load
    pub fn reload(&mut self, stored: T) -> Result<(), EditorError> {
        match self.state {
            EditorState::Viewing => {
                self.stored = stored;
                Ok(())
            }
            EditorState::Editing => Err(EditorError::AlreadyEditing),
            EditorState::Saving => Err(EditorError::SaveInProgress),
        }
    }

    /// One full save cycle against `store`
    pub async fn save<S>(&mut self, store: &S) -> Result<(), EditorError>
    where
        S: HomePageContentStore + ?Sized,
    {
        let editor = RefCell::new(self);
        save_section(
            store,
            || editor.borrow_mut().begin_save(),
            |outcome| editor.borrow_mut().finish_save(outcome),
        )
        .await
        .map(|_| ())
    }

    fn not_editing(&self) -> EditorError {
        if self.state == EditorState::Saving {
            EditorError::SaveInProgress
        } else {
            EditorError::NotEditing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_homepage::aggregate::{CtaSection, HomePageContent, LatestBlogsSection};
    use crate::domain::a002_homepage::aggregate::HeroSection;
    use crate::domain::a002_homepage::store::DocumentContentStore;
    use crate::test_utils::{MockDocumentBackend, MockHomePageStore};
    use futures::executor::block_on;

    #[test]
    fn edits_only_touch_the_buffer() {
        let mut editor = SectionEditor::new(CtaSection::default());
        assert_eq!(editor.edit(|c| c.title.clear()), Err(EditorError::NotEditing));

        editor.begin_edit().unwrap();
        editor.edit(|c| c.title = "Go".into()).unwrap();
        assert_eq!(editor.current().title, "Go");
        assert_eq!(editor.stored().title, "Ready for Your Next Adventure?");
    }

    #[test]
    fn successful_save_promotes_buffer() {
        let mut editor = SectionEditor::new(LatestBlogsSection::default());
        editor.begin_edit().unwrap();
        editor.edit(|s| s.posts_to_show = 6).unwrap();

        let payload = editor.begin_save().unwrap();
        assert_eq!(payload.posts_to_show, 6);
        assert!(editor.is_saving());

        editor.finish_save(Ok(())).unwrap();
        assert_eq!(editor.state(), EditorState::Viewing);
        assert_eq!(editor.stored().posts_to_show, 6);
        assert!(editor.buffer().is_none());
    }

    #[test]
    fn second_save_while_saving_is_rejected() {
        let mut editor = SectionEditor::new(CtaSection::default());
        editor.begin_edit().unwrap();
        editor.begin_save().unwrap();
        assert_eq!(editor.begin_save(), Err(EditorError::SaveInProgress));
        assert_eq!(editor.edit(|_| {}), Err(EditorError::SaveInProgress));
        assert_eq!(editor.cancel(), Err(EditorError::SaveInProgress));
    }

    #[test]
    fn failed_save_keeps_buffer_and_allows_retry_or_cancel() {
        let mut editor = SectionEditor::new(CtaSection::default());
        editor.begin_edit().unwrap();
        editor.edit(|c| c.primary_button = "Book".into()).unwrap();
        editor.begin_save().unwrap();

        editor.finish_save(Err("network down".into())).unwrap();
        assert!(editor.is_editing());
        assert_eq!(editor.error(), Some("network down"));
        assert_eq!(editor.current().primary_button, "Book");
        assert_eq!(editor.stored().primary_button, "Browse Packages");

        // retry is possible
        assert!(editor.begin_save().is_ok());
        editor.finish_save(Err("again".into())).unwrap();

        editor.cancel().unwrap();
        assert_eq!(editor.state(), EditorState::Viewing);
        assert_eq!(editor.current().primary_button, "Browse Packages");
        assert!(editor.error().is_none());
    }

    #[test]
    fn finish_without_save_is_rejected() {
        let mut editor = SectionEditor::new(CtaSection::default());
        assert_eq!(editor.finish_save(Ok(())), Err(EditorError::NotSaving));
    }

    #[test]
    fn reload_only_while_viewing() {
        let mut editor = SectionEditor::new(CtaSection::default());
        let fresh = CtaSection {
            title: "Fresh".into(),
            ..CtaSection::default()
        };
        editor.reload(fresh.clone()).unwrap();
        assert_eq!(editor.stored(), &fresh);

        editor.begin_edit().unwrap();
        assert_eq!(editor.reload(CtaSection::default()), Err(EditorError::AlreadyEditing));
    }

    #[test]
    fn save_writes_section_to_store() {
        let store = MockHomePageStore::new(HomePageContent::default());
        let mut editor = SectionEditor::new(CtaSection::default());
        editor.begin_edit().unwrap();
        editor.edit(|c| c.title = "Pack your bags".into()).unwrap();

        block_on(editor.save(&store)).unwrap();

        assert_eq!(editor.state(), EditorState::Viewing);
        assert_eq!(store.snapshot().cta.title, "Pack your bags");
        assert_eq!(store.snapshot().hero, HomePageContent::default().hero);
    }

    #[test]
    fn failed_store_save_returns_to_editing() {
        let store = MockHomePageStore::new(HomePageContent::default());
        store.fail_next("HTTP 500");
        let mut editor = SectionEditor::new(CtaSection::default());
        editor.begin_edit().unwrap();
        editor.edit(|c| c.title = "Lost".into()).unwrap();

        let err = block_on(editor.save(&store)).unwrap_err();
        assert!(matches!(err, EditorError::Store(AdminError::Operation(_))));
        assert!(editor.is_editing());
        assert_eq!(
            editor.error(),
            Some("Failed to update Call to Action. Please try again.")
        );
        assert_eq!(editor.current().title, "Lost");
        assert_eq!(store.snapshot().cta, CtaSection::default());
    }

    #[test]
    fn save_section_reaches_an_editor_held_in_a_cell() {
        let store = MockHomePageStore::new(HomePageContent::default());
        let editor = RefCell::new(SectionEditor::new(LatestBlogsSection::default()));
        editor.borrow_mut().begin_edit().unwrap();
        editor.borrow_mut().edit(|s| s.posts_to_show = 4).unwrap();

        let saved = block_on(save_section(
            &store,
            || editor.borrow_mut().begin_save(),
            |outcome| editor.borrow_mut().finish_save(outcome),
        ))
        .unwrap();

        assert_eq!(saved.posts_to_show, 4);
        assert_eq!(editor.borrow().state(), EditorState::Viewing);
        assert_eq!(editor.borrow().stored().posts_to_show, 4);
        assert_eq!(store.snapshot().latest_blogs.posts_to_show, 4);
    }

    #[test]
    fn save_section_refused_while_not_editing_leaves_store_alone() {
        let store = MockHomePageStore::new(HomePageContent::default());
        store.fail_next("must not be consumed");
        let editor = RefCell::new(SectionEditor::new(CtaSection::default()));

        let err = block_on(save_section(
            &store,
            || editor.borrow_mut().begin_save(),
            |outcome| editor.borrow_mut().finish_save(outcome),
        ))
        .unwrap_err();

        assert_eq!(err, EditorError::NotEditing);
        assert_eq!(editor.borrow().state(), EditorState::Viewing);
        // the armed failure is still there, so no write was attempted
        let mut other = SectionEditor::new(CtaSection::default());
        other.begin_edit().unwrap();
        assert!(block_on(other.save(&store)).is_err());
    }

    #[test]
    fn finish_error_is_reported_after_a_successful_write() {
        let store = MockHomePageStore::new(HomePageContent::default());
        let err = block_on(save_section(
            &store,
            || Ok(CtaSection::default()),
            |_| Err(EditorError::NotSaving),
        ))
        .unwrap_err();
        assert_eq!(err, EditorError::NotSaving);
    }

    #[test]
    fn concurrent_saves_of_two_sections_keep_both() {
        let store = DocumentContentStore::new(MockDocumentBackend::new(HomePageContent::default()));
        let hero = RefCell::new(SectionEditor::new(HeroSection::default()));
        let cta = RefCell::new(SectionEditor::new(CtaSection::default()));
        hero.borrow_mut().begin_edit().unwrap();
        hero.borrow_mut().edit(|h| h.title = "Explore".into()).unwrap();
        cta.borrow_mut().begin_edit().unwrap();
        cta.borrow_mut().edit(|c| c.title = "Book now".into()).unwrap();

        let (a, b) = block_on(futures::future::join(
            save_section(
                &store,
                || hero.borrow_mut().begin_save(),
                |outcome| hero.borrow_mut().finish_save(outcome),
            ),
            save_section(
                &store,
                || cta.borrow_mut().begin_save(),
                |outcome| cta.borrow_mut().finish_save(outcome),
            ),
        ));
        a.unwrap();
        b.unwrap();

        let remote = store.backend().snapshot();
        assert_eq!(remote.hero.title, "Explore");
        assert_eq!(remote.cta.title, "Book now");
        assert_eq!(hero.borrow().state(), EditorState::Viewing);
        assert_eq!(cta.borrow().state(), EditorState::Viewing);
    }
}
