//! Run-length expansion and collapse of tile sequences.

use wire::{RunRecord, MAX_RUN_COUNT};

use crate::types::Tile;

/// A tile repeated `count` times.
///
/// Runs only exist on the wire and while encoding; layers always hold the
/// expanded sequence. A well-formed run has `1 <= count <= MAX_RUN_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub tile: Tile,
    pub count: i16,
}

impl Run {
    #[must_use]
    pub const fn new(tile: Tile, count: i16) -> Self {
        Self { tile, count }
    }

    /// Splits a raw record into tile and count without validating the count.
    #[must_use]
    pub const fn from_record(record: RunRecord) -> Self {
        Self {
            tile: Tile::new(record.autotile_index, record.tileset_id, record.tile_id),
            count: record.count,
        }
    }

    #[must_use]
    pub const fn to_record(self) -> RunRecord {
        RunRecord {
            autotile_index: self.tile.autotile_index,
            tileset_id: self.tile.tileset_id,
            tile_id: self.tile.tile_id,
            count: self.count,
        }
    }

    /// Number of tiles this run expands to; zero for non-positive counts.
    #[must_use]
    pub fn len(self) -> usize {
        usize::try_from(self.count).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Produces `count` copies of `tile`.
///
/// A count of zero (or below) yields an empty sequence; decoders reject such
/// runs before getting here.
#[must_use]
pub fn expand(tile: Tile, count: i16) -> Vec<Tile> {
    let mut out = Vec::new();
    expand_into(&mut out, Run::new(tile, count));
    out
}

/// Appends the expansion of `run` to `out`, growing it at most once.
pub fn expand_into(out: &mut Vec<Tile>, run: Run) {
    out.resize(out.len() + run.len(), run.tile);
}

/// Collapses a tile sequence into runs with a single left-to-right scan.
///
/// Only adjacent equal tiles merge. A run that reaches [`MAX_RUN_COUNT`] is
/// closed and the next equal tile opens a new run.
#[must_use]
pub fn collapse(tiles: &[Tile]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for &tile in tiles {
        match runs.last_mut() {
            Some(run) if run.tile == tile && run.count < MAX_RUN_COUNT => run.count += 1,
            _ => runs.push(Run::new(tile, 1)),
        }
    }
    runs
}
