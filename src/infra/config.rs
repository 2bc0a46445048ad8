use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Persisted settings snapshot; every field has a default so a missing or
/// partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Prompt language: `auto` or an explicit supported code.
    pub language: String,
    /// Per-language custom prompt overrides; may contain `{{diff}}`.
    pub custom_prompts: HashMap<String, String>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            custom_prompts: HashMap::new(),
        }
    }
}

pub fn load_config() -> ReviewConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return ReviewConfig::default();
    };
    toml::from_str(&contents).unwrap_or_default()
}

pub fn save_config(config: &ReviewConfig) -> std::io::Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).unwrap_or_default();
    std::fs::write(path, contents)
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("DIFFSEND_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("diffsend")
        .join("config.toml")
}
