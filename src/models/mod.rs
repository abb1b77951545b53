pub mod config;
pub mod saved_palette;

pub use config::{AppConfig, ExtractionConfig, GenerationConfig, StorageConfig, DEFAULT_CONFIG_FILE};
pub use saved_palette::{SavedPalette, StoredColor};
