// File: src/config.rs
// Purpose: Site configuration parsing from greencape.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub forms: FormsConfig,

    #[serde(default)]
    pub motion: MotionConfig,
}

/// Form submission timing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormsConfig {
    /// Simulated round trip for forms that show a pending label
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// How long a status banner stays up
    #[serde(default = "default_status_dismiss_ms")]
    pub status_dismiss_ms: u64,
}

/// Scroll-triggered animation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: u64,

    #[serde(default = "default_counter_steps")]
    pub counter_steps: u32,

    /// Visible fraction that starts a counter
    #[serde(default = "default_counter_threshold")]
    pub counter_threshold: f64,

    /// Visible fraction that reveals a card
    #[serde(default = "default_fade_threshold")]
    pub fade_threshold: f64,

    #[serde(default = "default_fade_root_margin")]
    pub fade_root_margin: String,
}

// Default values
fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_status_dismiss_ms() -> u64 {
    5000
}

fn default_counter_duration_ms() -> u64 {
    2000
}

fn default_counter_steps() -> u32 {
    60
}

fn default_counter_threshold() -> f64 {
    0.5
}

fn default_fade_threshold() -> f64 {
    0.1
}

fn default_fade_root_margin() -> String {
    "0px 0px -50px 0px".to_string()
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            status_dismiss_ms: default_status_dismiss_ms(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: default_counter_duration_ms(),
            counter_steps: default_counter_steps(),
            counter_threshold: default_counter_threshold(),
            fade_threshold: default_fade_threshold(),
            fade_root_margin: default_fade_root_margin(),
        }
    }
}

impl FormsConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn status_dismiss(&self) -> Duration {
        Duration::from_millis(self.status_dismiss_ms)
    }
}

impl MotionConfig {
    /// Time between two counter frames
    pub fn counter_interval(&self) -> Duration {
        let steps = u64::from(self.counter_steps.max(1));
        Duration::from_millis(self.counter_duration_ms / steps)
    }
}

impl SiteConfig {
    /// Parse configuration from TOML text
    ///
    /// Empty input yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SiteConfig =
            toml::from_str(content).context("Failed to parse site configuration")?;

        anyhow::ensure!(
            config.motion.counter_steps > 0,
            "motion.counter_steps must be at least 1"
        );

        Ok(config)
    }
}
