//! In-memory repository for task workflow tests.

use async_trait::async_trait;
use mockable::Clock;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, Task, TaskId},
    ports::{TaskOrder, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are random UUIDs and timestamps come from the injected clock.
/// Unordered listings return tasks in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository<C: Clock + Send + Sync> {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: C,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
}

impl InMemoryTaskState {
    fn in_insertion_order(&self) -> Vec<Task> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.tasks.get(id).cloned())
            .collect()
    }
}

impl<C: Clock + Send + Sync> InMemoryTaskRepository<C> {
    /// Creates an empty repository stamping records with `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .map(|guard| guard.tasks.len())
            .unwrap_or(0)
    }

    /// Returns `true` if no tasks are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_state(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TaskRepository for InMemoryTaskRepository<C> {
    async fn store(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.write_state()?;
        let stored = task.into_task(TaskId::new(), &self.clock);
        state.insertion_order.push(stored.id());
        state.tasks.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write_state()?;
        let slot = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;

        let mut updated = task.clone();
        updated.touch(&self.clock);
        slot.clone_from(&updated);
        Ok(updated)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        state.insertion_order.retain(|stored_id| *stored_id != id);
        Ok(())
    }

    async fn list(&self, order: TaskOrder) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        let mut tasks = state.in_insertion_order();
        match order {
            TaskOrder::Unordered => {}
            TaskOrder::DeadlineAscending => {
                tasks.sort_by_key(|task| (task.deadline().is_none(), task.deadline()));
            }
            TaskOrder::CreatedDescending => {
                tasks.reverse();
                tasks.sort_by_key(|task| Reverse(task.created_at()));
            }
        }
        Ok(tasks)
    }
}
