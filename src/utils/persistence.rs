//! Persistence helpers for the ~/.arcade/ directory: per-game high scores and
//! the JSON config file.

use crate::core::constants::{ARCADE_DIR, SCORE_FILE_EXT};
use crate::core::error::{ArcadeError, Result};
use log::warn;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the ~/.arcade/ directory path, creating it if needed.
pub fn arcade_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(ArcadeError::NoHomeDir)?;
    let dir = home_dir.join(ARCADE_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.arcade/.
pub fn save_path(filename: &str) -> Result<PathBuf> {
    Ok(arcade_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!("ignoring invalid {}: {e}", path.display());
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// Parse a stored high score: a decimal integer, surrounding whitespace allowed.
pub fn parse_score(key: &str, text: &str) -> Result<u32> {
    text.trim().parse().map_err(|_| ArcadeError::Parse {
        key: key.to_string(),
        value: text.to_string(),
    })
}

/// One integer per game key, read once per session and written only when
/// beaten.
pub trait ScoreStore {
    /// Stored high score for `key`; 0 when absent or unreadable.
    fn load(&self, key: &str) -> u32;

    fn save(&mut self, key: &str, score: u32) -> Result<()>;
}

/// High scores as `<dir>/<key>.score` text files.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    dir: PathBuf,
}

impl FileScoreStore {
    /// Store rooted at ~/.arcade/.
    pub fn new() -> Result<Self> {
        Ok(Self { dir: arcade_dir()? })
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{SCORE_FILE_EXT}"))
    }

    fn try_load(&self, key: &str) -> Result<Option<u32>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        parse_score(key, &text).map(Some)
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self, key: &str) -> u32 {
        match self.try_load(key) {
            Ok(score) => score.unwrap_or(0),
            Err(e) => {
                warn!("{e}; treating high score as 0");
                0
            }
        }
    }

    fn save(&mut self, key: &str, score: u32) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), score.to_string())?;
        Ok(())
    }
}

/// In-memory store for tests and for running without a home directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: HashMap<String, u32>,
    writes: usize,
    read_only: bool,
}

impl MemoryScoreStore {
    pub fn with_score(key: &str, score: u32) -> Self {
        let mut store = Self::default();
        store.scores.insert(key.to_string(), score);
        store
    }

    /// A store whose writes always fail.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.scores.get(key).copied()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self, key: &str) -> u32 {
        self.get(key).unwrap_or(0)
    }

    fn save(&mut self, key: &str, score: u32) -> Result<()> {
        if self.read_only {
            return Err(ArcadeError::Io {
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only score store",
                ),
            });
        }
        self.scores.insert(key.to_string(), score);
        self.writes += 1;
        Ok(())
    }
}
