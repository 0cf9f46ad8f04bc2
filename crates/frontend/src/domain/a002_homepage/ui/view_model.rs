use crate::domain::a002_homepage::ui::state::HomePageState;
use crate::shared::notifications::NotificationService;
use contracts::domain::a002_homepage::{
    save_failed_message, save_section, EditorError, HomePageSection, SectionEditor,
};
use leptos::prelude::*;

pub fn saved_message<T: HomePageSection>() -> String {
    format!("{} updated successfully!", T::KEY.label())
}

/// Reactive wrapper around one `SectionEditor`
pub struct SectionViewModel<T: HomePageSection + Send + Sync> {
    pub editor: RwSignal<SectionEditor<T>>,
    document: HomePageState,
    notify: NotificationService,
}

impl<T: HomePageSection + Send + Sync> Clone for SectionViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: HomePageSection + Send + Sync> Copy for SectionViewModel<T> {}

impl<T: HomePageSection + Send + Sync> SectionViewModel<T> {
    pub fn new(initial: T, document: HomePageState, notify: NotificationService) -> Self {
        Self {
            editor: RwSignal::new(SectionEditor::new(initial)),
            document,
            notify,
        }
    }

    pub fn is_editing(&self) -> Signal<bool> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.is_editing()))
    }

    pub fn is_saving(&self) -> Signal<bool> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.is_saving()))
    }

    /// Inputs are locked unless the section is being edited
    pub fn locked(&self) -> Signal<bool> {
        let editor = self.editor;
        Signal::derive(move || !editor.with(|e| e.is_editing()))
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.editor.with(|e| f(e.current()))
    }

    /// Reactive text of one field
    pub fn field(&self, get: fn(&T) -> String) -> Signal<String> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| get(e.current())))
    }

    /// Input handler writing one field of the buffer
    pub fn setter(&self, set: fn(&mut T, String)) -> Callback<String> {
        let this = *self;
        Callback::new(move |value: String| this.edit(move |s| set(s, value)))
    }

    pub fn edit(&self, f: impl FnOnce(&mut T)) {
        self.editor.update(|e| {
            if let Err(err) = e.edit(f) {
                log::debug!("ignored edit of {}: {}", T::KEY, err);
            }
        });
    }

    pub fn begin_edit(&self) {
        self.editor.update(|e| {
            if let Err(err) = e.begin_edit() {
                log::debug!("begin_edit {}: {}", T::KEY, err);
            }
        });
    }

    pub fn cancel(&self) {
        self.editor.update(|e| {
            if let Err(err) = e.cancel() {
                log::debug!("cancel {}: {}", T::KEY, err);
            }
        });
    }

    /// Submit the buffer. A second call while saving is rejected by the
    /// editor and does not reach the store.
    pub fn save_command(&self) {
        let this = *self;
        let editor = self.editor;
        let store = self.document.store();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = save_section(
                &*store,
                || {
                    editor
                        .try_update(|e| e.begin_save())
                        .unwrap_or(Err(EditorError::NotEditing))
                },
                |result| {
                    editor
                        .try_update(|e| e.finish_save(result))
                        .unwrap_or(Err(EditorError::NotSaving))
                },
            )
            .await;

            match outcome {
                Ok(saved) => {
                    this.document
                        .content
                        .update(|doc| doc.set_section(saved.into_value()));
                    this.notify.success(saved_message::<T>());
                }
                Err(EditorError::Store(err)) => {
                    log::error!("saving {} failed: {}", T::KEY, err);
                    this.notify.error(save_failed_message(T::KEY));
                }
                Err(err @ (EditorError::NotEditing | EditorError::SaveInProgress)) => {
                    log::debug!("save {} refused: {}", T::KEY, err);
                }
                Err(err) => log::warn!("save {} ended out of order: {}", T::KEY, err),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_homepage::{CtaSection, HeroSection};

    #[test]
    fn saved_message_uses_section_label() {
        assert_eq!(saved_message::<HeroSection>(), "Hero Section updated successfully!");
        assert_eq!(saved_message::<CtaSection>(), "Call to Action updated successfully!");
    }
}
