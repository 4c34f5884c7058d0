//! Store configuration and factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizkeep_core::traits::{KeyValueStore, MemoryStore};

use crate::file::FileStore;

/// Which backend holds quiz data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// A JSON file in the data directory.
    #[default]
    File,
    /// Process memory; nothing survives exit.
    Memory,
}

/// Top-level quizkeep configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizkeepConfig {
    /// Directory holding the store file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Storage backend.
    #[serde(default)]
    pub store: StoreKind,
    /// File name of the JSON store inside `data_dir`.
    #[serde(default = "default_store_file")]
    pub store_file: String,
}

fn default_data_dir() -> PathBuf {
    std::env::var("HOME")
        .ok()
        .map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("quizkeep")
        })
        .unwrap_or_else(|| PathBuf::from(".quizkeep"))
}

fn default_store_file() -> String {
    "store.json".to_string()
}

impl Default for QuizkeepConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store: StoreKind::default(),
            store_file: default_store_file(),
        }
    }
}

impl QuizkeepConfig {
    /// Full path of the JSON store file.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file)
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizkeep.toml` in the current directory
/// 2. `~/.config/quizkeep/config.toml`
///
/// Environment variable override: `QUIZKEEP_DATA_DIR`.
pub fn load_config() -> Result<QuizkeepConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizkeepConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizkeep.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            toml::from_str::<QuizkeepConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizkeepConfig::default(),
    };

    if let Ok(dir) = std::env::var("QUIZKEEP_DATA_DIR") {
        if !dir.trim().is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizkeep"))
}

/// Create the configured store backend.
pub fn open_store(config: &QuizkeepConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.store {
        StoreKind::File => {
            let path = config.store_path();
            anyhow::ensure!(
                !path.is_dir(),
                "store path is a directory: {}",
                path.display()
            );
            tracing::debug!("using file store at {}", path.display());
            Ok(Arc::new(FileStore::new(path)))
        }
        StoreKind::Memory => {
            tracing::debug!("using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizkeepConfig::default();
        assert_eq!(config.store, StoreKind::File);
        assert_eq!(config.store_file, "store.json");
        assert!(config.store_path().ends_with("store.json"));
    }

    #[test]
    fn parse_config() {
        let toml_str = r#"
data_dir = "/tmp/quizzes"
store = "memory"
"#;
        let config: QuizkeepConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/quizzes"));
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.store_file, "store.json");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizkeep.toml");
        std::fs::write(&path, "store_file = \"quizzes.json\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.store_file, "quizzes.json");
    }

    #[test]
    fn invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "store = 5").unwrap();

        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[tokio::test]
    async fn open_store_builds_each_backend() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = QuizkeepConfig {
            data_dir: dir.path().to_path_buf(),
            ..QuizkeepConfig::default()
        };

        let file = open_store(&config).unwrap();
        file.set_item("k", "v").await.unwrap();
        assert!(dir.path().join("store.json").exists());

        config.store = StoreKind::Memory;
        let memory = open_store(&config).unwrap();
        assert_eq!(memory.get_item("k").await.unwrap(), None);
    }
}
