// store.rs — GoalStore: the in-memory goal collection and its persisted slot.
//
// The store owns an ordered Vec<Goal> (newest first) and mirrors it into one
// key of a KeyValueStorage. Every mutation rewrites the whole collection;
// there is no delta persistence. The store is an ordinary value built at
// startup and dropped at exit, so callers pass it around explicitly.
//
// Active/completed views are recomputed on every call.

use chrono::{DateTime, Utc};

use crate::error::GoalError;
use crate::goal::{self, Goal};
use crate::storage::KeyValueStorage;

/// Key of the persisted slot unless configured otherwise.
pub const DEFAULT_KEY: &str = "longterm-goals";

/// Goal collection mirrored to a storage slot.
pub struct GoalStore<S> {
    storage: S,
    key: String,
    goals: Vec<Goal>,
}

impl<S: KeyValueStorage> GoalStore<S> {
    /// Create an empty store over `storage` using the default slot key.
    /// Nothing is read until `load()` is called.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            goals: Vec::new(),
        }
    }

    /// Create a store and immediately load whatever the slot holds.
    pub fn open(storage: S, key: impl Into<String>) -> Result<Self, GoalError> {
        let mut store = Self::with_key(storage, key);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// An empty or blank slot leaves the current collection alone. Malformed JSON and
    /// goals whose `completed` flag disagrees with `completedAt` are errors,
    /// and in both cases the in-memory collection is left untouched.
    pub fn load(&mut self) -> Result<(), GoalError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            tracing::debug!(key = %self.key, "no persisted goals");
            return Ok(());
        };
        if raw.trim().is_empty() {
            tracing::debug!(key = %self.key, "persisted slot is blank");
            return Ok(());
        }
        let goals: Vec<Goal> = serde_json::from_str(&raw)?;
        if let Some(bad) = goals.iter().find(|g| !g.is_consistent()) {
            return Err(GoalError::InconsistentGoal { id: bad.id });
        }
        tracing::debug!(key = %self.key, count = goals.len(), "loaded goals");
        self.goals = goals;
        Ok(())
    }

    /// Create a goal from `title`, put it at the front and persist. The title
    /// is stored exactly as given.
    pub fn add(&mut self, title: &str) -> Result<Goal, GoalError> {
        self.add_at(title, goal::now())
    }

    fn add_at(&mut self, title: &str, now: DateTime<Utc>) -> Result<Goal, GoalError> {
        let goal = Goal::new(self.next_id(now.timestamp_millis()), title, now);
        tracing::info!(id = goal.id, title = %goal.title, "goal added");
        self.goals.insert(0, goal.clone());
        self.persist()?;
        Ok(goal)
    }

    /// Mark the first goal with `id` completed. Unknown ids are a silent
    /// no-op and nothing is written. Returns whether a goal was found.
    pub fn complete(&mut self, id: i64) -> Result<bool, GoalError> {
        let Some(found) = self.goals.iter_mut().find(|g| g.id == id) else {
            tracing::debug!(id, "complete: no such goal");
            return Ok(false);
        };
        found.complete(goal::now());
        tracing::info!(id, "goal completed");
        self.persist()?;
        Ok(true)
    }

    /// Remove every goal with `id` and persist. Returns how many went.
    pub fn delete(&mut self, id: i64) -> Result<usize, GoalError> {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        let removed = before - self.goals.len();
        if removed == 0 {
            tracing::debug!(id, "delete: no such goal");
        } else {
            tracing::info!(id, removed, "goal deleted");
        }
        self.persist()?;
        Ok(removed)
    }

    /// Move the first goal with `id` back to the active list. Unknown ids are
    /// a no-op. Returns whether a goal was found.
    pub fn restore(&mut self, id: i64) -> Result<bool, GoalError> {
        let Some(found) = self.goals.iter_mut().find(|g| g.id == id) else {
            tracing::debug!(id, "restore: no such goal");
            return Ok(false);
        };
        found.restore();
        tracing::info!(id, "goal restored");
        self.persist()?;
        Ok(true)
    }

    /// Goals not yet completed, in collection order.
    pub fn active_goals(&self) -> Vec<&Goal> {
        self.goals.iter().filter(|g| !g.completed).collect()
    }

    /// Completed goals, in collection order.
    pub fn completed_goals(&self) -> Vec<&Goal> {
        self.goals.iter().filter(|g| g.completed).collect()
    }

    /// The full collection, newest first.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: i64) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Ids come from the clock but must stay unique, so a second goal added
    /// within the same millisecond takes the next free value.
    fn next_id(&self, now_ms: i64) -> i64 {
        match self.goals.iter().map(|g| g.id).max() {
            Some(max) if max >= now_ms => max.saturating_add(1),
            _ => now_ms,
        }
    }

    /// Serialize the whole collection into the slot.
    fn persist(&mut self) -> Result<(), GoalError> {
        let json = serde_json::to_string(&self.goals)?;
        self.storage.set(&self.key, &json)
    }
}
