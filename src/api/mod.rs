pub mod export;
pub mod extract;
pub mod generate;
pub mod gradient;
pub mod headers;
pub mod palettes;

pub use export::{handle_export, ExportRequest, __path_handle_export};
pub use extract::{handle_extract, handle_session_extraction, ColorJson, ExtractResponse};
pub use extract::{__path_handle_extract, __path_handle_session_extraction};
pub use generate::{handle_generate, GenerateRequest, GenerateResponse, __path_handle_generate};
pub use gradient::{handle_gradient, GradientKindJson, GradientRequest, GradientResponse, StopJson};
pub use gradient::__path_handle_gradient;
pub use palettes::{
    handle_create_palette, handle_delete_palette, handle_get_palette, handle_list_palettes, CreatePaletteRequest,
};
pub use palettes::{
    __path_handle_create_palette, __path_handle_delete_palette, __path_handle_get_palette,
    __path_handle_list_palettes,
};
