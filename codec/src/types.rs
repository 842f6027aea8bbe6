//! Core types for the codec.

use std::fmt;
use std::num::NonZeroUsize;
use std::slice::Chunks;

/// A single tile reference.
///
/// Identity is the triple; two tiles are the same tile exactly when all three
/// indices match. Presentation data (such as [`crate::display_color`]) is
/// derived on demand and never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub autotile_index: i16,
    pub tileset_id: i16,
    pub tile_id: i16,
}

impl Tile {
    /// Creates a new tile reference.
    #[must_use]
    pub const fn new(autotile_index: i16, tileset_id: i16, tile_id: i16) -> Self {
        Self {
            autotile_index,
            tileset_id,
            tile_id,
        }
    }
}

/// Formats as `autotile,tileset,tile` in decimal.
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.autotile_index, self.tileset_id, self.tile_id)
    }
}

/// One z-ordered grid of tiles.
///
/// `tiles` linearizes the grid row-major; the column count is supplied by
/// whoever displays it and is not part of the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer {
    pub id: u32,
    pub z: u32,
    pub tiles: Vec<Tile>,
}

impl Layer {
    /// Creates an empty layer.
    #[must_use]
    pub const fn new(id: u32, z: u32) -> Self {
        Self {
            id,
            z,
            tiles: Vec::new(),
        }
    }

    /// Creates a layer with the given tiles.
    #[must_use]
    pub const fn with_tiles(id: u32, z: u32, tiles: Vec<Tile>) -> Self {
        Self { id, z, tiles }
    }

    /// Returns the wire header for this layer.
    #[must_use]
    pub const fn header(&self) -> wire::LayerHeader {
        wire::LayerHeader::new(self.id, self.z)
    }

    /// Splits the tiles into rows of `columns` tiles; the last row may be short.
    pub fn rows(&self, columns: NonZeroUsize) -> Chunks<'_, Tile> {
        self.tiles.chunks(columns.get())
    }

    /// Number of rows needed to show every tile at `columns` per row.
    #[must_use]
    pub fn row_count(&self, columns: NonZeroUsize) -> usize {
        self.tiles.len().div_ceil(columns.get())
    }
}

/// A decoded scene: layers in on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    pub layers: Vec<Layer>,
}

impl Scene {
    #[must_use]
    pub const fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Number of layers, which is also the layer count needed to decode the
    /// encoded form of this scene.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }
}

impl From<Vec<Layer>> for Scene {
    fn from(layers: Vec<Layer>) -> Self {
        Self { layers }
    }
}
