pub mod extractor;
pub mod palette_store;
pub mod request_token;
pub mod storage;

pub use extractor::ExtractionService;
pub use palette_store::PaletteStore;
pub use request_token::{ExtractionSessions, LatestOnly, RequestToken};
pub use storage::{FileStore, InMemoryStore, KeyValueStore};
