use crate::error::{BibleError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CORPUS_FILENAME: &str = "kjv.json";
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Configuration for bible, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BibleConfig {
    /// JSON verse dump to read from (defaults to `<data dir>/kjv.json`)
    #[serde(default)]
    pub corpus_path: Option<PathBuf>,

    /// Fixed output width; the terminal width is used when unset
    #[serde(default)]
    pub wrap_width: Option<usize>,
}

impl BibleConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BibleError::Io)?;
        let config: BibleConfig =
            serde_json::from_str(&content).map_err(BibleError::Serialization)?;
        Ok(config)
    }
}

/// Where the verse data and the save document live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiblePaths {
    pub data_dir: PathBuf,
    pub corpus: PathBuf,
}

impl BiblePaths {
    /// Corpus precedence: explicit override (flag or environment), then the
    /// config file, then `<data dir>/kjv.json`.
    pub fn resolve(data_dir: PathBuf, config: &BibleConfig, corpus_override: Option<PathBuf>) -> Self {
        let corpus = corpus_override
            .or_else(|| config.corpus_path.clone())
            .unwrap_or_else(|| data_dir.join(CORPUS_FILENAME));
        Self { data_dir, corpus }
    }
}
