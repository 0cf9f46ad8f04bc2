//! In-memory stores for tests.
//!
//! Each mock can be told to fail its next write, which is how the
//! operation-error paths are exercised.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;

use crate::domain::a001_destination::{Destination, DestinationDto, DestinationId, DestinationStore};
use crate::domain::a002_homepage::store::{ensure_section_matches, HomePageDocumentBackend};
use crate::domain::a002_homepage::{HomePageContent, HomePageContentStore, SectionKey, SectionValue};
use crate::shared::{AdminError, AdminResult};

// ===== MockDestinationStore =====

#[derive(Default)]
pub struct MockDestinationStore {
    items: RefCell<Vec<Destination>>,
    fail_next: RefCell<Option<String>>,
    create_calls: Cell<usize>,
    delete_calls: Cell<usize>,
}

impl MockDestinationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(items: Vec<Destination>) -> Self {
        Self {
            items: RefCell::new(items),
            ..Self::default()
        }
    }

    /// The next write fails with `AdminError::Operation(msg)`
    pub fn fail_next(&self, msg: &str) {
        *self.fail_next.borrow_mut() = Some(msg.to_string());
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.get()
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.get()
    }

    fn take_failure(&self) -> AdminResult<()> {
        match self.fail_next.borrow_mut().take() {
            Some(msg) => Err(AdminError::operation(msg)),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl DestinationStore for MockDestinationStore {
    async fn list(&self) -> AdminResult<Vec<Destination>> {
        Ok(self.items.borrow().clone())
    }

    async fn create(&self, input: &DestinationDto) -> AdminResult<Destination> {
        self.create_calls.set(self.create_calls.get() + 1);
        self.take_failure()?;
        let created = Destination::new(DestinationId::new_v4(), &input.name, &input.country);
        self.items.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, destination: &Destination) -> AdminResult<Destination> {
        self.take_failure()?;
        let mut items = self.items.borrow_mut();
        let slot = items
            .iter_mut()
            .find(|d| d.id == destination.id)
            .ok_or_else(|| AdminError::NotFound(format!("Destination {}", destination.id)))?;
        slot.name = destination.name.clone();
        slot.country = destination.country.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: &DestinationId) -> AdminResult<()> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        self.take_failure()?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|d| &d.id != id);
        if items.len() == before {
            return Err(AdminError::NotFound(format!("Destination {}", id)));
        }
        Ok(())
    }
}

// ===== MockHomePageStore =====

pub struct MockHomePageStore {
    content: RefCell<HomePageContent>,
    fail_next: RefCell<Option<String>>,
}

impl MockHomePageStore {
    pub fn new(content: HomePageContent) -> Self {
        Self {
            content: RefCell::new(content),
            fail_next: RefCell::new(None),
        }
    }

    pub fn fail_next(&self, msg: &str) {
        *self.fail_next.borrow_mut() = Some(msg.to_string());
    }

    pub fn snapshot(&self) -> HomePageContent {
        self.content.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HomePageContentStore for MockHomePageStore {
    async fn get_all(&self) -> AdminResult<HomePageContent> {
        Ok(self.snapshot())
    }

    async fn update(&self, section: SectionKey, value: SectionValue) -> AdminResult<()> {
        ensure_section_matches(section, &value)?;
        if let Some(msg) = self.fail_next.borrow_mut().take() {
            return Err(AdminError::operation(msg));
        }
        self.content.borrow_mut().set_section(value);
        Ok(())
    }
}

// ===== MockDocumentBackend =====

/// Pending on the first poll, ready on the second
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Whole-document backend whose writes suspend once before landing, so
/// two writes started together are both pending at the same time.
pub struct MockDocumentBackend {
    remote: RefCell<HomePageContent>,
    fail_next: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MockDocumentBackend {
    pub fn new(remote: HomePageContent) -> Self {
        Self {
            remote: RefCell::new(remote),
            fail_next: RefCell::new(None),
            writes: Cell::new(0),
        }
    }

    pub fn fail_next(&self, msg: &str) {
        *self.fail_next.borrow_mut() = Some(msg.to_string());
    }

    pub fn snapshot(&self) -> HomePageContent {
        self.remote.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[async_trait(?Send)]
impl HomePageDocumentBackend for MockDocumentBackend {
    async fn fetch(&self) -> AdminResult<HomePageContent> {
        Ok(self.snapshot())
    }

    async fn replace(&self, document: &HomePageContent) -> AdminResult<()> {
        let failure = self.fail_next.borrow_mut().take();
        YieldOnce(false).await;
        if let Some(msg) = failure {
            return Err(AdminError::operation(msg));
        }
        *self.remote.borrow_mut() = document.clone();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
