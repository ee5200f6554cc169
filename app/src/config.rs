//! Configuration loading and persistence.
//!
//! Handles the TOML config file (~/.config/swingforge/config.toml) with a
//! `[server]` section for the web host and a `[generator]` section for
//! one-shot and stream defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use swingforge::SkillTier;

/// Returns `~/.config/swingforge/config.toml`.
pub fn default_config_path() -> PathBuf {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swingforge");
    dir.join("config.toml")
}

/// Top-level persisted config. Hand-editable TOML.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwingforgeConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Seconds between swings on the stream socket.
    #[serde(default = "default_stream_interval")]
    pub stream_interval_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            stream_interval_secs: default_stream_interval(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Club code used when the CLI or a stream client does not pick one.
    #[serde(default = "default_club")]
    pub club: String,
    #[serde(default = "default_skill")]
    pub skill: SkillTier,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            club: default_club(),
            skill: default_skill(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3030".into()
}

fn default_stream_interval() -> u64 {
    30
}

fn default_club() -> String {
    "7I".into()
}

fn default_skill() -> SkillTier {
    SkillTier::Intermediate
}

// ---------------------------------------------------------------------------
// Persistence I/O
// ---------------------------------------------------------------------------

/// Load persisted config from disk. If the file does not exist, creates it
/// with all-defaults and returns that.
pub fn load(path: &Path) -> SwingforgeConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<SwingforgeConfig>(&contents) {
            Ok(config) => {
                tracing::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("failed to parse {}: {e}", path.display());
                SwingforgeConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let defaults = SwingforgeConfig::default();
            tracing::info!("no config file found, creating {}", path.display());
            save_to(path, &defaults);
            defaults
        }
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", path.display());
            SwingforgeConfig::default()
        }
    }
}

/// Write config to a specific path. Creates parent dirs if needed. Never panics.
pub fn save_to(path: &Path, config: &SwingforgeConfig) {
    if let Some(dir) = path.parent()
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        tracing::warn!("failed to create config dir {}: {e}", dir.display());
        return;
    }
    match toml::to_string_pretty(config) {
        Ok(contents) => {
            if let Err(e) = std::fs::write(path, contents) {
                tracing::warn!("failed to write {}: {e}", path.display());
            }
        }
        Err(e) => {
            tracing::warn!("failed to serialize config: {e}");
        }
    }
}
