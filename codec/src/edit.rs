//! Validated single-tile edits.
//!
//! Text typed by a user is parsed into a [`Tile`] here, before it can reach a
//! layer. The codec itself only ever sees well-typed tiles.

use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{CodecError, CodecResult, InputReason, TileField};
use crate::types::{Scene, Tile};

/// Parses one tile field from user text.
pub fn parse_tile_field(field: TileField, text: &str) -> CodecResult<i16> {
    let text = text.trim();
    let invalid = |reason| CodecError::InvalidTileInput { field, reason };
    if text.is_empty() {
        return Err(invalid(InputReason::Empty));
    }

    let wide = text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => invalid(InputReason::OutOfRange { value: i64::MAX }),
        IntErrorKind::NegOverflow => invalid(InputReason::OutOfRange { value: i64::MIN }),
        _ => invalid(InputReason::NotInteger),
    })?;
    i16::try_from(wide).map_err(|_| invalid(InputReason::OutOfRange { value: wide }))
}

/// Parses the three fields of a tile from separate user inputs.
pub fn parse_tile_input(
    autotile_index: &str,
    tileset_id: &str,
    tile_id: &str,
) -> CodecResult<Tile> {
    Ok(Tile::new(
        parse_tile_field(TileField::AutotileIndex, autotile_index)?,
        parse_tile_field(TileField::TilesetId, tileset_id)?,
        parse_tile_field(TileField::TileId, tile_id)?,
    ))
}

/// Parses `autotile,tileset,tile`, the same form `Display` produces.
impl FromStr for Tile {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        match fields.as_slice() {
            [autotile_index, tileset_id, tile_id] => {
                parse_tile_input(autotile_index, tileset_id, tile_id)
            }
            _ => Err(CodecError::MalformedTileText {
                fields: fields.len(),
            }),
        }
    }
}

/// Replaces one tile in place and returns the tile it replaced.
///
/// Only that tile changes: other layers, the layer's `id` and `z`, and the
/// layer length are untouched.
pub fn replace_tile(
    scene: &mut Scene,
    layer_index: usize,
    tile_index: usize,
    tile: Tile,
) -> CodecResult<Tile> {
    let layer_count = scene.layers.len();
    let layer = scene
        .layers
        .get_mut(layer_index)
        .ok_or(CodecError::LayerNotFound {
            index: layer_index,
            layer_count,
        })?;
    let tile_count = layer.tiles.len();
    let slot = layer
        .tiles
        .get_mut(tile_index)
        .ok_or(CodecError::TileNotFound {
            layer: layer_index,
            index: tile_index,
            tile_count,
        })?;
    Ok(std::mem::replace(slot, tile))
}

impl Scene {
    /// Returns a copy of the scene with one tile replaced.
    pub fn with_tile_replaced(
        &self,
        layer_index: usize,
        tile_index: usize,
        tile: Tile,
    ) -> CodecResult<Self> {
        let mut scene = self.clone();
        replace_tile(&mut scene, layer_index, tile_index, tile)?;
        Ok(scene)
    }
}
