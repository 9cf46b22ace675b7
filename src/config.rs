//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user file is merged on top of it, so a
//! config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "public"   # Served static tree; gallery lives in images/gallery
//!
//! [invitation]
//! groom = "Groom"
//! bride = "Bride"
//! date = "Saturday, June 6, 2026 at 12:00 PM"
//! venue = "The Garden Hall"
//! address = "123 Garden Road"
//! message = "We would love for you to join us."   # Markdown
//!
//! [gallery]
//! position = "middle"       # "middle" or "bottom"
//! slots = 9                 # Numbered slots image1..imageN
//! images = ["/images/gallery/image1.jpg"]   # Fallback list
//!
//! [rsvp]
//! enabled = true
//!
//! [account]
//! enabled = false
//! accounts = [{ bank = "...", number = "...", holder = "..." }]
//!
//! [effects]
//! enabled = true            # Master switch, overrides every toggle below
//! page_transition = true
//! scroll_animation = true
//! image_hover = true
//! gallery_animation = true
//! button_animation = true
//! falling_elements = "petals"  # none|hearts|petals|snow|sparkles|minimal|geometric
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! ```
//!
//! Unknown keys are rejected to catch typos early. A malformed config is a
//! fatal startup error; any well-formed combination of toggles is valid,
//! including all of them off.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// Read-only after load: the binary wraps it in an `Arc` once and hands it to
/// every component that needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the served static tree.
    pub content_root: String,
    /// Static page text.
    pub invitation: InvitationConfig,
    /// Gallery placement, slot count and fallback list.
    pub gallery: GalleryConfig,
    pub rsvp: RsvpConfig,
    pub account: AccountConfig,
    /// Motion effect toggles.
    pub effects: EffectsConfig,
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: "public".to_string(),
            invitation: InvitationConfig::default(),
            gallery: GalleryConfig::default(),
            rsvp: RsvpConfig::default(),
            account: AccountConfig::default(),
            effects: EffectsConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.slots == 0 || self.gallery.slots > MAX_SLOTS {
            return Err(ConfigError::Validation(format!(
                "gallery.slots must be 1-{MAX_SLOTS}"
            )));
        }
        if let Some(bad) = self.gallery.images.iter().find(|p| !p.starts_with('/')) {
            return Err(ConfigError::Validation(format!(
                "gallery.images entries must be root-relative paths, got {bad:?}"
            )));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Base directory scanned by the gallery resolver.
    pub fn gallery_dir(&self) -> PathBuf {
        Path::new(&self.content_root).join("images").join("gallery")
    }

    /// Directory served under `/images`.
    pub fn images_dir(&self) -> PathBuf {
        Path::new(&self.content_root).join("images")
    }
}

pub const MAX_SLOTS: u32 = 99;

/// Static invitation text. Nothing here drives behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvitationConfig {
    pub groom: String,
    pub bride: String,
    /// Free-form date line shown in the hero and the date section.
    pub date: String,
    pub venue: String,
    pub address: String,
    /// Greeting body, rendered as Markdown.
    pub message: String,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            groom: "Groom".to_string(),
            bride: "Bride".to_string(),
            date: "Saturday, June 6, 2026 at 12:00 PM".to_string(),
            venue: "The Garden Hall".to_string(),
            address: "123 Garden Road".to_string(),
            message: "We would love for you to join us.".to_string(),
        }
    }
}

/// Where the gallery section sits in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryPosition {
    #[default]
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub position: GalleryPosition,
    /// Number of numbered slots (`image1` .. `imageN`) the resolver checks.
    pub slots: u32,
    /// Fallback list used when the live directory cannot be resolved.
    pub images: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            position: GalleryPosition::Middle,
            slots: 9,
            images: (1..=9)
                .map(|i| format!("/images/gallery/image{i}.jpg"))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RsvpConfig {
    pub enabled: bool,
}

impl Default for RsvpConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountConfig {
    pub enabled: bool,
    pub accounts: Vec<GiftAccount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GiftAccount {
    pub bank: String,
    pub number: String,
    pub holder: String,
}

/// Ambient particle style. `None` disables the particle layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallingStyle {
    None,
    Hearts,
    #[default]
    Petals,
    Snow,
    Sparkles,
    Minimal,
    Geometric,
}

impl FallingStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hearts => "hearts",
            Self::Petals => "petals",
            Self::Snow => "snow",
            Self::Sparkles => "sparkles",
            Self::Minimal => "minimal",
            Self::Geometric => "geometric",
        }
    }
}

/// Capability toggles for the effect orchestrator.
///
/// `enabled` is an AND-gate over every other field: see
/// [`EffectGate`](crate::effects::EffectGate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectsConfig {
    pub enabled: bool,
    pub page_transition: bool,
    pub scroll_animation: bool,
    pub image_hover: bool,
    pub gallery_animation: bool,
    pub button_animation: bool,
    pub falling_elements: FallingStyle,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            page_transition: true,
            scroll_animation: true,
            image_hover: true,
            gallery_animation: true,
            button_animation: true,
            falling_elements: FallingStyle::Petals,
        }
    }
}

impl EffectsConfig {
    /// Every toggle off. Used by tests and constrained deployments.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            page_transition: false,
            scroll_animation: false,
            image_hover: false,
            gallery_animation: false,
            button_animation: false,
            falling_elements: FallingStyle::None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given file, falling back to stock defaults when it
/// does not exist.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(path)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Invite Configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory holding the served static tree. Gallery images are read from
# <content_root>/images/gallery and <content_root>/images/gallery/thumbs.
content_root = "public"

# ---------------------------------------------------------------------------
# Page text
# ---------------------------------------------------------------------------
[invitation]
groom = "Groom"
bride = "Bride"
date = "Saturday, June 6, 2026 at 12:00 PM"
venue = "The Garden Hall"
address = "123 Garden Road"
# Markdown is allowed.
message = "We would love for you to join us."

# ---------------------------------------------------------------------------
# Gallery
# ---------------------------------------------------------------------------
[gallery]
# "middle" (after the venue) or "bottom" (after RSVP and accounts).
position = "middle"

# Numbered slots checked on disk: image1 .. imageN, .webp preferred over .jpg.
slots = 9

# Served when the gallery directory is missing or unreadable.
images = [
    "/images/gallery/image1.jpg",
    "/images/gallery/image2.jpg",
    "/images/gallery/image3.jpg",
    "/images/gallery/image4.jpg",
    "/images/gallery/image5.jpg",
    "/images/gallery/image6.jpg",
    "/images/gallery/image7.jpg",
    "/images/gallery/image8.jpg",
    "/images/gallery/image9.jpg",
]

# ---------------------------------------------------------------------------
# Optional sections
# ---------------------------------------------------------------------------
[rsvp]
enabled = true

[account]
enabled = false
accounts = []

# ---------------------------------------------------------------------------
# Motion effects
# ---------------------------------------------------------------------------
[effects]
# Master switch. When false every effect below is off, whatever its value.
enabled = true
page_transition = true
scroll_animation = true
image_hover = true
gallery_animation = true
button_animation = true
# none, hearts, petals, snow, sparkles, minimal, geometric
falling_elements = "petals"

# ---------------------------------------------------------------------------
# HTTP server
# ---------------------------------------------------------------------------
[server]
host = "127.0.0.1"
port = 3000
"##
}
