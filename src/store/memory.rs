use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Predicate, Record, Repository, StoreResult};

struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

/// A collection held in process memory.
///
/// Ids come from a per-collection counter that starts at 1 and only moves
/// forward, so a deleted id is never handed out again. Since ids are
/// monotonic, key order is insertion order.
pub struct MemoryRepository<T> {
    inner: RwLock<Table<T>>,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table { next_id: 1, rows: BTreeMap::new() }),
        }
    }
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn find(&self, predicate: Predicate<'_, T>) -> StoreResult<Vec<T>> {
        let table = self.inner.read().await;
        Ok(table.rows.values().filter(|r| predicate(*r)).cloned().collect())
    }

    async fn get(&self, id: i64) -> StoreResult<Option<T>> {
        let table = self.inner.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, draft: T::Draft) -> StoreResult<T> {
        let mut table = self.inner.write().await;
        let id = table.next_id;
        table.next_id += 1;
        let record = T::from_draft(id, draft, Utc::now());
        table.rows.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, patch: T::Patch) -> StoreResult<Option<T>> {
        let mut table = self.inner.write().await;
        Ok(table.rows.get_mut(&id).map(|record| {
            record.apply_patch(patch);
            record.clone()
        }))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut table = self.inner.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.inner.read().await.rows.len())
    }
}
