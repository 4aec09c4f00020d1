//! In-memory todo store.
//!
//! # Design
//! One `RwLock` guards both the item list and the id counter, so id
//! assignment and every find-then-mutate sequence run in a single critical
//! section. Readers share the lock and always see whole items.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::model::Todo;

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u64,
}

/// Shared handle to the process-wide todo collection.
///
/// Cloning is cheap and every clone sees the same data. Build a fresh store
/// per test for isolation.
#[derive(Debug, Clone)]
pub struct TodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                todos: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Append a new incomplete item with the next id.
    pub async fn create(&self, task: String) -> Todo {
        let mut inner = self.inner.write().await;
        let todo = Todo::new(inner.next_id, task, Utc::now());
        inner.next_id += 1;
        inner.todos.push(todo.clone());
        tracing::debug!(id = todo.id(), "todo created");
        todo
    }

    /// Snapshot of every item in insertion order.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.todos.clone()
    }

    pub async fn get(&self, id: u64) -> Option<Todo> {
        let inner = self.inner.read().await;
        inner.todos.iter().find(|t| t.id() == id).cloned()
    }

    pub async fn contains(&self, id: u64) -> bool {
        let inner = self.inner.read().await;
        inner.todos.iter().any(|t| t.id() == id)
    }

    /// Run `mutate` on the item with `id` under the write lock and return the
    /// result, or `None` if no such item exists.
    pub async fn update_if_exists<F>(&self, id: u64, mutate: F) -> Option<Todo>
    where
        F: FnOnce(&mut Todo),
    {
        let mut inner = self.inner.write().await;
        let todo = inner.todos.iter_mut().find(|t| t.id() == id)?;
        mutate(todo);
        tracing::debug!(id, "todo updated");
        Some(todo.clone())
    }

    /// Remove the item with `id`. Its id is never handed out again.
    pub async fn remove(&self, id: u64) -> Option<Todo> {
        let mut inner = self.inner.write().await;
        let index = inner.todos.iter().position(|t| t.id() == id)?;
        let removed = inner.todos.remove(index);
        tracing::debug!(id, "todo removed");
        Some(removed)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let store = TodoStore::new();
        for expected in 1..=3 {
            let todo = store.create(format!("task {expected}")).await;
            assert_eq!(todo.id(), expected);
            assert!(!todo.is_completed());
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let store = TodoStore::new();
        store.create("a".to_string()).await;
        let b = store.create("b".to_string()).await;
        store.remove(b.id()).await.unwrap();
        store.remove(1).await.unwrap();
        assert!(store.is_empty().await);

        let c = store.create("c".to_string()).await;
        assert_eq!(c.id(), 3);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = TodoStore::new();
        for task in ["a", "b", "c", "d"] {
            store.create(task.to_string()).await;
        }
        store.remove(2).await.unwrap();

        let tasks: Vec<String> = store
            .list()
            .await
            .iter()
            .map(|t| t.task().to_string())
            .collect();
        assert_eq!(tasks, ["a", "c", "d"]);
    }

    #[tokio::test]
    async fn update_if_exists_mutates_in_place() {
        let store = TodoStore::new();
        let created = store.create("a".to_string()).await;

        let updated = store
            .update_if_exists(created.id(), |t| t.set_completed(true))
            .await
            .unwrap();
        assert!(updated.is_completed());
        assert_eq!(updated.created_at(), created.created_at());
        assert_eq!(store.get(created.id()).await, Some(updated));
    }

    #[tokio::test]
    async fn update_if_exists_missing_id_skips_mutator() {
        let store = TodoStore::new();
        let mut called = false;
        let result = store.update_if_exists(42, |_| called = true).await;
        assert!(result.is_none());
        assert!(!called);
    }

    #[tokio::test]
    async fn missing_ids_report_none() {
        let store = TodoStore::new();
        store.create("a".to_string()).await;
        assert!(store.get(999).await.is_none());
        assert!(store.remove(999).await.is_none());
        assert!(!store.contains(999).await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = TodoStore::new();
        let other = store.clone();
        store.create("shared".to_string()).await;
        assert!(other.contains(1).await);
    }

    #[tokio::test]
    async fn concurrent_creates_assign_unique_ids() {
        let store = TodoStore::new();
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(format!("t{i}")).await.id() })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
    }
}
