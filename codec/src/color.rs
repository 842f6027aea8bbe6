//! Presentation color derived from a tile reference.

use crate::types::Tile;

const HASH_SEED: u32 = 5381;

/// djb2-xor string hash over UTF-16 code units, last unit first.
#[must_use]
pub fn string_hash(text: &str) -> u32 {
    let units: Vec<u16> = text.encode_utf16().collect();
    units
        .iter()
        .rev()
        .fold(HASH_SEED, |hash, &unit| hash.wrapping_mul(33) ^ u32::from(unit))
}

/// Four lowercase hex digits identifying a tile on screen.
///
/// Computed from the tile's `autotile,tileset,tile` text on every call and
/// never stored in the model or written to a scene file.
#[must_use]
pub fn display_color(tile: &Tile) -> String {
    format!("{:04x}", string_hash(&tile.to_string()) & 0xFFFF)
}
