//! In-memory task store
//!
//! The store is an ordered list of tasks. Every operation takes the current
//! store by reference and returns the next one, so callers own the state and
//! can keep the previous version around. Tasks are shared behind [`Arc`] so
//! that entries untouched by an operation keep their identity in the new store.

use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Opaque, stable identifier of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh task identifiers
///
/// Implementations must never hand out the same identifier twice.
pub trait IdGenerator {
    fn next_id(&mut self) -> TaskId;
}

/// Random UUID v4 identifiers, used by the application
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> TaskId {
        TaskId(Uuid::new_v4())
    }
}

/// Deterministic identifiers counting up from 1
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    counter: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TaskId {
        self.counter += 1;
        TaskId(Uuid::from_u128(self.counter))
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskStoreError {
    #[error("task text must not be empty")]
    EmptyText,
}

/// Ordered collection of tasks, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Arc<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new pending task, rejecting empty text.
    ///
    /// Whitespace is not trimmed: `"   "` is a valid task.
    pub fn try_add(&self, text: &str, ids: &mut dyn IdGenerator) -> Result<Self, TaskStoreError> {
        if text.is_empty() {
            return Err(TaskStoreError::EmptyText);
        }

        let task = Task {
            id: ids.next_id(),
            text: text.to_string(),
            completed: false,
        };

        let mut tasks = self.tasks.clone();
        tasks.push(Arc::new(task));
        Ok(Self { tasks })
    }

    /// Append a new pending task. Empty text leaves the store unchanged.
    pub fn add(&self, text: &str, ids: &mut dyn IdGenerator) -> Self {
        match self.try_add(text, ids) {
            Ok(next) => next,
            Err(e) => {
                log::debug!("Store: add rejected: {}", e);
                self.clone()
            }
        }
    }

    /// Drop the task with `id`. Unknown ids are a no-op.
    pub fn remove(&self, id: TaskId) -> Self {
        let tasks = self.tasks.iter().filter(|task| task.id != id).cloned().collect();
        Self { tasks }
    }

    /// Flip the completion flag of the task with `id`. Unknown ids are a no-op.
    pub fn toggle_complete(&self, id: TaskId) -> Self {
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    Arc::new(Task {
                        completed: !task.completed,
                        ..Task::clone(task)
                    })
                } else {
                    Arc::clone(task)
                }
            })
            .collect();
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().map(|task| task.as_ref())
    }

    /// Shared handles to the tasks, in display order
    pub fn entries(&self) -> &[Arc<Task>] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.iter().find(|task| task.id == id)
    }

    /// Task at a display position
    pub fn get_index(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index).map(|task| task.as_ref())
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn completed_count(&self) -> usize {
        self.iter().filter(|task| task.completed).count()
    }
}
