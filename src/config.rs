// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::rewrite::{english::ENGLISH, french::FRENCH, RuleTable};

lazy_static::lazy_static! {
    /// Global config operation lock.
    ///
    /// Guards load->modify->save cycles so concurrent writers cannot
    /// lose each other's changes.
    ///
    /// ```ignore
    /// let _guard = CONFIG_LOCK.lock().unwrap();
    /// let mut config = AppConfig::load()?;
    /// // modify config...
    /// config.save()?;
    /// ```
    pub static ref CONFIG_LOCK: Mutex<()> = Mutex::new(());
}

/// Locale of the built-in rule table.
///
/// Which table the host hands to the engine is a configuration choice;
/// the engine itself is locale-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    French,
    English,
}

impl Locale {
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::French => "Français",
            Locale::English => "English",
        }
    }

    /// Built-in rule table for this locale.
    pub fn table(&self) -> RuleTable {
        match self {
            Locale::French => FRENCH.clone(),
            Locale::English => ENGLISH.clone(),
        }
    }
}

/// User-defined literal substitution.
///
/// Merged into the built-in table just ahead of the spacing-cleanup
/// pass, so user rules follow the same `" word"` conventions as the
/// built-in word rules and their output still gets cleaned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRule {
    pub pattern: String,
    pub replacement: String,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub locale: Locale,
    /// NFC-fold and collapse whitespace in recognizer output before
    /// rewriting, so decomposed accents still match the rule patterns.
    #[serde(default = "default_nfc_normalize")]
    pub nfc_normalize: bool,
    #[serde(default)]
    pub custom_rules: Vec<CustomRule>,
}

fn default_nfc_normalize() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            nfc_normalize: true,
            custom_rules: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("no user config directory"))?;
        let app_dir = config_dir.join("DictationRewrite");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!("config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file {:?}", path))?;

        tracing::info!(
            locale = config.locale.display_name(),
            custom_rules = config.custom_rules.len(),
            "config loaded from {:?}",
            path
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        // Atomic write: temp file first, then rename over the target
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content)
            .with_context(|| format!("failed to write temp config file {:?}", temp_path))?;
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("failed to replace config file {:?}", path))?;

        tracing::info!("config saved to {:?}", path);
        Ok(())
    }
}
