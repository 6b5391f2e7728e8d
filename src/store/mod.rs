//! Content storage.
//!
//! Every collection is reached through the [`Repository`] trait so route
//! handlers and services never depend on where records actually live. The
//! only implementation today is [`memory::MemoryRepository`]; its contents last
//! for the lifetime of the process.

pub mod memory;
pub mod seed;
pub mod users;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{
    announcement::Announcement, business::Business, contact::ContactMessage, donation::Donation,
    event::Event, program::Program, registration::Registration,
};

use self::{memory::MemoryRepository, users::UserDirectory};

/// Failure reaching the backing storage. The in-memory store never fails;
/// the variant is there for backends that can.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A stored entity with an integer id assigned by its collection.
pub trait Record: Clone + Send + Sync + 'static {
    /// Creation input; omitted optional fields are already defaulted.
    type Draft: Send + 'static;
    /// Partial update; `None` fields keep their stored value.
    type Patch: Send + 'static;

    fn id(&self) -> i64;

    fn from_draft(id: i64, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);

    /// Value of the public-listing flag, `None` for collections without one.
    fn active(&self) -> Option<bool> {
        None
    }
}

pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// All records matching `predicate`, in insertion order.
    async fn find(&self, predicate: Predicate<'_, T>) -> StoreResult<Vec<T>>;

    async fn get(&self, id: i64) -> StoreResult<Option<T>>;

    async fn create(&self, draft: T::Draft) -> StoreResult<T>;

    async fn update(&self, id: i64, patch: T::Patch) -> StoreResult<Option<T>>;

    /// Returns whether the record existed.
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    async fn count(&self) -> StoreResult<usize>;

    /// Whole collection, or only records whose active flag equals `active`.
    async fn list(&self, active: Option<bool>) -> StoreResult<Vec<T>> {
        match active {
            None => self.find(&|_: &T| true).await,
            Some(flag) => self.find(&move |r: &T| r.active() == Some(flag)).await,
        }
    }
}

/// Every collection the site serves, shared by all handlers.
#[derive(Clone)]
pub struct ContentStore {
    pub announcements: Arc<dyn Repository<Announcement>>,
    pub events: Arc<dyn Repository<Event>>,
    pub programs: Arc<dyn Repository<Program>>,
    pub contact_messages: Arc<dyn Repository<ContactMessage>>,
    pub donations: Arc<dyn Repository<Donation>>,
    pub businesses: Arc<dyn Repository<Business>>,
    pub registrations: Arc<dyn Repository<Registration>>,
    pub users: Arc<UserDirectory>,
}

impl ContentStore {
    /// Fresh, empty collections kept in process memory.
    pub fn in_memory() -> Self {
        Self {
            announcements: Arc::new(MemoryRepository::new()),
            events: Arc::new(MemoryRepository::new()),
            programs: Arc::new(MemoryRepository::new()),
            contact_messages: Arc::new(MemoryRepository::new()),
            donations: Arc::new(MemoryRepository::new()),
            businesses: Arc::new(MemoryRepository::new()),
            registrations: Arc::new(MemoryRepository::new()),
            users: Arc::new(UserDirectory::new()),
        }
    }

    /// Item count per collection, keyed by collection name.
    pub async fn sizes(&self) -> StoreResult<Vec<(&'static str, usize)>> {
        Ok(vec![
            ("announcements", self.announcements.count().await?),
            ("events", self.events.count().await?),
            ("programs", self.programs.count().await?),
            ("contact_messages", self.contact_messages.count().await?),
            ("donations", self.donations.count().await?),
            ("businesses", self.businesses.count().await?),
            ("registrations", self.registrations.count().await?),
            ("users", self.users.count().await),
        ])
    }
}
