use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::{GlyphRamp, RAMP_DEFAULT};

/// Full runtime configuration for conversion and playback.
///
/// Serializable to TOML. Every field has a sane default.
///
/// # Example
/// ```
/// use al_core::config::AnimConfig;
/// let config = AnimConfig::default();
/// assert_eq!(config.fps, 24);
/// assert!(config.looping);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AnimConfig {
    // === Conversion ===
    /// Directory holding the pre-extracted source images.
    pub source_dir: PathBuf,
    /// Directory receiving one `.txt` file per frame.
    pub output_dir: PathBuf,
    /// Extension of source images (without dot, case-insensitive).
    pub extension: String,
    /// Output width in characters.
    pub width: u32,
    /// Vertical squash compensating for tall terminal cells.
    pub char_aspect: f32,
    /// Glyph ramp, darkest → lightest.
    pub ramp: String,

    // === Playback ===
    /// Frames per second.
    pub fps: u32,
    /// Restart from the first frame after the last one.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Pause before playback starts, in milliseconds.
    pub start_delay_ms: u64,
}

impl Default for AnimConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("frames"),
            output_dir: PathBuf::from("ascii_frames"),
            extension: "png".to_string(),
            width: 80,
            char_aspect: 0.55,
            ramp: RAMP_DEFAULT.to_string(),
            fps: 24,
            looping: true,
            start_delay_ms: 1000,
        }
    }
}

impl AnimConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.width = self.width.clamp(1, 1000);
        self.char_aspect = self.char_aspect.clamp(0.1, 4.0);
        self.fps = self.fps.clamp(1, 240);
        self.start_delay_ms = self.start_delay_ms.min(10_000);
        if self.ramp.chars().count() < 2 {
            log::warn!("Ramp {:?} too short, using default ramp", self.ramp);
            self.ramp = RAMP_DEFAULT.to_string();
        }
        let ext = self.extension.trim_start_matches('.').to_ascii_lowercase();
        self.extension = if ext.is_empty() { "png".to_string() } else { ext };
    }

    /// Lookup table for the configured ramp.
    #[must_use]
    pub fn glyph_ramp(&self) -> GlyphRamp {
        GlyphRamp::new(&self.ramp)
    }
}

/// Intermediate TOML structure; every section optional.
#[derive(Deserialize)]
struct ConfigFile {
    convert: Option<ConvertSection>,
    playback: Option<PlaybackSection>,
}

/// `[convert]` section, all fields optional for partial override.
#[derive(Deserialize)]
struct ConvertSection {
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    extension: Option<String>,
    width: Option<u32>,
    char_aspect: Option<f32>,
    ramp: Option<String>,
}

/// `[playback]` section, all fields optional.
#[derive(Deserialize)]
struct PlaybackSection {
    fps: Option<u32>,
    #[serde(rename = "loop")]
    looping: Option<bool>,
    start_delay_ms: Option<u64>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this layout.
///
/// # Example
/// ```
/// use al_core::config::parse_config;
/// let config = parse_config("[playback]\nfps = 12\nloop = false\n").unwrap();
/// assert_eq!(config.fps, 12);
/// assert!(!config.looping);
/// assert_eq!(config.width, 80);
/// ```
pub fn parse_config(content: &str) -> Result<AnimConfig> {
    let file: ConfigFile = toml::from_str(content).context("TOML parse error")?;

    let mut config = AnimConfig::default();

    if let Some(c) = file.convert {
        if let Some(v) = c.source_dir {
            config.source_dir = v;
        }
        if let Some(v) = c.output_dir {
            config.output_dir = v;
        }
        if let Some(v) = c.extension {
            config.extension = v;
        }
        if let Some(v) = c.width {
            config.width = v;
        }
        if let Some(v) = c.char_aspect {
            config.char_aspect = v;
        }
        if let Some(v) = c.ramp {
            config.ramp = v;
        }
    }

    if let Some(p) = file.playback {
        if let Some(v) = p.fps {
            config.fps = v;
        }
        if let Some(v) = p.looping {
            config.looping = v;
        }
        if let Some(v) = p.start_delay_ms {
            config.start_delay_ms = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Load a TOML file and merge it over the defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use al_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<AnimConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config in {}", path.display()))
}
