pub mod export;
pub mod image_loader;
pub mod palette_source;

pub use export::{ColorRecord, MatchRecord, PaletteReport};
pub use image_loader::{decode_image, load_image, ImageError};
pub use palette_source::{
    fetch_tailwind_palette, load_reference_palette, PaletteOrigin, PaletteSourceConfig,
    PaletteSourceError, PaletteTable,
};
