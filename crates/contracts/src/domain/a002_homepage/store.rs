use async_trait::async_trait;
use std::cell::RefCell;

use super::aggregate::HomePageContent;
use super::section::{SectionKey, SectionValue};
use crate::shared::{AdminError, AdminResult};

/// Keyed homepage content owned by the backend
#[async_trait(?Send)]
pub trait HomePageContentStore {
    /// Whole document, used to seed every section editor at once
    async fn get_all(&self) -> AdminResult<HomePageContent>;

    async fn get(&self, section: SectionKey) -> AdminResult<SectionValue> {
        Ok(self.get_all().await?.section(section))
    }

    /// Replace one section wholesale
    async fn update(&self, section: SectionKey, value: SectionValue) -> AdminResult<()>;
}

/// Guard for `update` implementations: the payload must belong to `section`
pub fn ensure_section_matches(section: SectionKey, value: &SectionValue) -> AdminResult<()> {
    if value.key() != section {
        return Err(AdminError::validation(format!(
            "Section mismatch: expected {}, got {}",
            section,
            value.key()
        )));
    }
    Ok(())
}

/// Remote side that only reads and writes the whole document
#[async_trait(?Send)]
pub trait HomePageDocumentBackend {
    async fn fetch(&self) -> AdminResult<HomePageContent>;

    async fn replace(&self, document: &HomePageContent) -> AdminResult<()>;
}

/// `HomePageContentStore` over a whole-document backend.
///
/// Keeps a local copy of the document. A section update is merged into the
/// copy before the write is sent, so each write carries every section
/// saved before it, including saves still in flight.
pub struct DocumentContentStore<B> {
    backend: B,
    document: RefCell<HomePageContent>,
}

impl<B: HomePageDocumentBackend> DocumentContentStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            document: RefCell::new(HomePageContent::default()),
        }
    }

    /// Local copy as of the last load or update
    pub fn document(&self) -> HomePageContent {
        self.document.borrow().clone()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[async_trait(?Send)]
impl<B: HomePageDocumentBackend> HomePageContentStore for DocumentContentStore<B> {
    async fn get_all(&self) -> AdminResult<HomePageContent> {
        let fetched = self.backend.fetch().await?;
        *self.document.borrow_mut() = fetched.clone();
        Ok(fetched)
    }

    async fn update(&self, section: SectionKey, value: SectionValue) -> AdminResult<()> {
        ensure_section_matches(section, &value)?;

        let (previous, body) = {
            let mut document = self.document.borrow_mut();
            let previous = document.section(section);
            document.set_section(value);
            (previous, document.clone())
        };

        log::debug!("writing homepage document for section {}", section);
        if let Err(e) = self.backend.replace(&body).await {
            // local copy holds accepted sections only
            self.document.borrow_mut().set_section(previous);
            return Err(e);
        }
        Ok(())
    }
}
