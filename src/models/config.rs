use serde::Deserialize;
use std::path::{Path, PathBuf};
use swatch::{GeneratorOptions, QuantizeOptions};

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "toolkit.yaml";

/// Application configuration loaded from toolkit.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub extraction: ExtractionConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Image upload and quantization settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,

    /// Palette size (1-8)
    pub max_colors: usize,

    /// Sample every Nth pixel
    pub quality: usize,

    /// Images whose longest side exceeds this are downscaled before sampling
    pub downscale_above: u32,

    /// Skip near-white pixels
    pub ignore_white: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 10 * 1024 * 1024,
            max_colors: 8,
            quality: 10,
            downscale_above: 1024,
            ignore_white: false,
        }
    }
}

impl ExtractionConfig {
    pub fn quantize_options(&self) -> QuantizeOptions {
        QuantizeOptions::new()
            .max_colors(self.max_colors)
            .quality(self.quality)
            .ignore_white(self.ignore_white)
    }
}

/// Harmonic palette generation settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    pub count: usize,
    pub hue_step: u16,
    pub saturation_min: u8,
    pub saturation_max: u8,
    pub lightness_min: u8,
    pub lightness_max: u8,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let options = GeneratorOptions::default();
        Self {
            count: options.count,
            hue_step: options.hue_step,
            saturation_min: options.saturation.start,
            saturation_max: options.saturation.end,
            lightness_min: options.lightness.start,
            lightness_max: options.lightness.end,
        }
    }
}

impl GenerationConfig {
    /// Ranges are end-exclusive, matching [`GeneratorOptions`].
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions::new()
            .count(self.count)
            .hue_step(self.hue_step)
            .saturation(self.saturation_min..self.saturation_max)
            .lightness(self.lightness_min..self.lightness_max)
    }
}

/// Saved-palette storage settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file backing the key-value store
    pub path: PathBuf,

    /// Key the palette list is stored under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("palettes.json"),
            key: "colorPalettes".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when the
    /// file is missing or invalid.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        max_colors = config.extraction.max_colors,
                        store = %config.storage.path.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::debug!(%e, path = %path.display(), "No config file, using defaults");
                Self::default()
            }
        }
    }

    /// Load from `CONFIG_FILE` (default toolkit.yaml) and apply the
    /// `PALETTE_STORE` override.
    pub fn from_env() -> Self {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut config = Self::load(Path::new(&path));
        if let Ok(store) = std::env::var("PALETTE_STORE") {
            config.storage.path = PathBuf::from(store);
        }
        config
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
