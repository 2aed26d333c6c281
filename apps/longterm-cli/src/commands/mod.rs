// mod.rs — Shared command context: resolved config and data directory.

pub mod config;
pub mod goal;

use std::path::PathBuf;

use anyhow::Context as _;
use longterm_goals::config::{default_data_dir, CONFIG_FILE};
use longterm_goals::{FileStorage, GoalStore, GoalsConfig};

/// Everything a command needs to find and open the goal store.
pub struct Context {
    pub config: GoalsConfig,
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
}

impl Context {
    /// Resolve settings. `--data-dir` beats `[storage] data_dir`, which beats
    /// the platform default. The config file is looked up in the data
    /// directory named on the command line (or the default one) unless
    /// `--config` points elsewhere.
    pub fn resolve(data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.unwrap_or_else(|| {
            data_dir
                .clone()
                .unwrap_or_else(default_data_dir)
                .join(CONFIG_FILE)
        });
        let config = GoalsConfig::load_or_default(&config_path)
            .with_context(|| format!("loading {}", config_path.display()))?;
        let data_dir = data_dir.unwrap_or_else(|| config.storage.resolved_data_dir());
        Ok(Self {
            config,
            config_path,
            data_dir,
        })
    }

    /// Open the file-backed store and load the persisted goals.
    pub fn open_store(&self) -> anyhow::Result<GoalStore<FileStorage>> {
        let storage = FileStorage::new(&self.data_dir)?;
        let store = GoalStore::open(storage, self.config.storage.key.as_str())
            .with_context(|| format!("reading goals from {}", self.data_dir.display()))?;
        Ok(store)
    }
}
