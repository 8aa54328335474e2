use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of an element that must be inside the trigger zone before
    /// it is considered visible (0.0 to 1.0)
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
    /// Adjustment to the bottom edge of the trigger zone, in page units.
    /// Negative values shrink the zone so elements must scroll further in
    /// before revealing
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: i32,
    /// Delay step between consecutive card reveals in one batch
    #[serde(default = "default_stagger_increment")]
    pub stagger_increment_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
            bottom_margin: default_bottom_margin(),
            stagger_increment_ms: default_stagger_increment(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Added to the scroll offset before matching sections, compensating
    /// for the fixed navbar height
    #[serde(default = "default_header_offset")]
    pub header_offset: u32,
    /// Scroll offset beyond which the navbar switches to its scrolled style
    #[serde(default = "default_navbar_threshold")]
    pub navbar_threshold: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_offset: default_header_offset(),
            navbar_threshold: default_navbar_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Minimum trimmed length of the name field
    #[serde(default = "default_min_name_len")]
    pub min_name_len: usize,
    /// Minimum trimmed length of the message field
    #[serde(default = "default_min_message_len")]
    pub min_message_len: usize,
    /// How long the success panel stays visible
    #[serde(default = "default_success_dismiss")]
    pub success_dismiss_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_name_len: default_min_name_len(),
            min_message_len: default_min_message_len(),
            success_dismiss_ms: default_success_dismiss(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Animate viewport scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Page units moved per scroll key press, in rows
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// How many page units one terminal row represents. Page geometry and
    /// the engine thresholds are expressed in units, so this sets the
    /// effective viewport size
    #[serde(default = "default_units_per_row")]
    pub units_per_row: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            smooth_scroll: default_true(),
            animation_duration_ms: default_animation_duration(),
            scroll_lines: default_scroll_lines(),
            units_per_row: default_units_per_row(),
        }
    }
}

fn default_visibility_threshold() -> f64 {
    0.1
}

fn default_bottom_margin() -> i32 {
    -50 // elements reveal once they are 50 units into the viewport
}

fn default_stagger_increment() -> u64 {
    80
}

fn default_header_offset() -> u32 {
    120
}

fn default_navbar_threshold() -> u32 {
    50
}

fn default_min_name_len() -> usize {
    2
}

fn default_min_message_len() -> usize {
    10
}

fn default_success_dismiss() -> u64 {
    4000
}

fn default_tick_rate() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    3
}

fn default_units_per_row() -> u32 {
    10
}

impl EngineConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (preferences, logs)
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
    }

    /// Get the default page file path
    pub fn page_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("page.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_behavior() {
        let config = EngineConfig::default();
        assert!((config.reveal.visibility_threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.reveal.bottom_margin, -50);
        assert_eq!(config.reveal.stagger_increment_ms, 80);
        assert_eq!(config.nav.header_offset, 120);
        assert_eq!(config.nav.navbar_threshold, 50);
        assert_eq!(config.form.min_name_len, 2);
        assert_eq!(config.form.min_message_len, 10);
        assert_eq!(config.form.success_dismiss_ms, 4000);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            [nav]
            header_offset = 90
            "#,
        )
        .unwrap();
        assert_eq!(config.nav.header_offset, 90);
        assert_eq!(config.nav.navbar_threshold, 50);
        assert_eq!(config.reveal.stagger_increment_ms, 80);
    }
}
