use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct MuralConfig {
    #[serde(default)]
    pub item: ItemSection,
    #[serde(default)]
    pub selection: SelectionSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Deserialize)]
pub struct ItemSection {
    /// Base item used as the visual carrier for image items.
    #[serde(default = "default_base_identifier")]
    pub base_identifier: String,
}

fn default_base_identifier() -> String {
    "minecraft:glow_item_frame".into()
}

impl Default for ItemSection {
    fn default() -> Self {
        Self {
            base_identifier: default_base_identifier(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectionSection {
    /// Hint appended to the status text while a selection is pending.
    #[serde(default = "default_cancel_hint")]
    pub cancel_hint: String,
}

fn default_cancel_hint() -> String {
    "Left click to cancel".into()
}

impl Default for SelectionSection {
    fn default() -> Self {
        Self {
            cancel_hint: default_cancel_hint(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl MuralConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
