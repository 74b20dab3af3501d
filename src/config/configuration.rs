use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Lexicon configuration, loaded from a YAML file. Example:
///
/// ```yaml
/// extra_suffixes:
///   - OBE
///   - DDS
/// disabled_suffixes:
///   - V
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub extra_suffixes: Vec<String>,
    #[serde(default)]
    pub disabled_suffixes: Vec<String>,
}

impl LexiconConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let cfg = serde_yaml::from_reader(BufReader::new(file))?;
        Ok(cfg)
    }
}
