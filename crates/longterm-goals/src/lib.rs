//! # longterm-goals
//!
//! Long-term goal tracking: an ordered goal list mirrored to a key-value slot.
//!
//! A [`GoalStore`] owns the collection (newest first) and rewrites the whole
//! serialized list into its storage slot after every mutation. Goals move
//! between the active and completed lists via `complete` and `restore`.
//!
//! ## Key components
//!
//! - [`Goal`] — a single goal record (`id`, `title`, `createdAt`,
//!   `completed`, `completedAt`)
//! - [`GoalStore`] — add / complete / delete / restore plus the active and
//!   completed views
//! - [`KeyValueStorage`] — the persisted slot abstraction, with
//!   [`FileStorage`] (JSON file per key) and [`MemoryStorage`]
//! - [`GoalsConfig`] — TOML configuration: storage location, window
//!   geometry and theme
//! - [`Palette`] — named theme colours

pub mod config;
pub mod error;
pub mod goal;
pub mod storage;
pub mod store;
pub mod theme;

pub use config::{GoalsConfig, StorageConfig, ThemeConfig, WindowConfig};
pub use error::GoalError;
pub use goal::Goal;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{GoalStore, DEFAULT_KEY};
pub use theme::{Color, Palette};
