pub mod extract;
pub mod palette;

pub use extract::{handle_extract, ExtractQuery, ExtractResponse, __path_handle_extract};
pub use palette::{handle_palette, PaletteResponse, ReferenceEntry, __path_handle_palette};
