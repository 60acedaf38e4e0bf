use axum::{extract::State, Json};
use hue_engine::ReferencePalette;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::AppState;
use crate::services::PaletteOrigin;

/// One token of the reference palette
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReferenceEntry {
    /// `family-shade`, e.g. `sky-400`
    pub token: String,
    pub family: String,
    pub shade: u16,
    pub hex: String,
}

/// The reference palette colors are matched against
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaletteResponse {
    /// "remote", "file" or "fallback"
    pub origin: String,
    /// URL or file path the palette was loaded from
    pub source: Option<String>,
    /// Number of entries
    pub count: usize,
    pub entries: Vec<ReferenceEntry>,
}

impl PaletteResponse {
    pub fn new(palette: &ReferencePalette, origin: &PaletteOrigin) -> Self {
        let entries: Vec<ReferenceEntry> = palette
            .entries()
            .iter()
            .map(|e| ReferenceEntry {
                token: e.token(),
                family: e.family.clone(),
                shade: e.shade,
                hex: e.hex(),
            })
            .collect();

        Self {
            origin: origin.kind().to_string(),
            source: origin.location(),
            count: entries.len(),
            entries,
        }
    }
}

/// Show the loaded reference palette
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Reference palette", body = PaletteResponse),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(State(state): State<AppState>) -> Json<PaletteResponse> {
    Json(PaletteResponse::new(&state.palette, &state.origin))
}
