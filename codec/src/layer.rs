//! Single-layer decoding and encoding.

use bytestream::ByteWriter;
use tracing::{debug, trace};
use wire::{encode_layer_frame, LayerFrame, RunRecord};

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;
use crate::run::{collapse, expand_into, Run};
use crate::types::Layer;

/// Number of tiles a framed layer expands to, counting only positive runs.
pub(crate) fn expanded_len(frame: &LayerFrame<'_>) -> usize {
    frame
        .runs()
        .filter(|record| record.count > 0)
        .fold(0usize, |total, record| {
            total.saturating_add(Run::from_record(record).len())
        })
}

/// Decodes a framed layer into its expanded tile sequence.
///
/// Every run count is validated and the expanded length checked against
/// `limits` before any tile is materialized, so the tile vector is allocated
/// exactly once.
pub fn decode_layer(
    frame: &LayerFrame<'_>,
    index: usize,
    limits: &CodecLimits,
) -> CodecResult<Layer> {
    let mut total = 0usize;
    for (run_index, record) in frame.runs().enumerate() {
        if record.count < 1 {
            return Err(CodecError::InvalidRunCount {
                layer: index,
                run: run_index,
                count: record.count,
            });
        }
        total = total.saturating_add(Run::from_record(record).len());
        if total > limits.max_tiles_per_layer {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::TilesPerLayer,
                limit: limits.max_tiles_per_layer,
                actual: total,
            });
        }
    }

    let mut tiles = Vec::with_capacity(total);
    for record in frame.runs() {
        let run = Run::from_record(record);
        trace!(
            layer = index,
            autotile_index = run.tile.autotile_index,
            tileset_id = run.tile.tileset_id,
            tile_id = run.tile.tile_id,
            count = run.count,
            "run"
        );
        expand_into(&mut tiles, run);
    }

    debug!(
        layer = index,
        id = frame.header.id,
        z = frame.header.z,
        size = frame.size(),
        runs = frame.run_count(),
        tiles = tiles.len(),
        "decoded layer"
    );

    Ok(Layer::with_tiles(frame.header.id, frame.header.z, tiles))
}

/// Encodes a layer payload (header plus collapsed runs) into `writer`.
///
/// Returns the payload size, which is the value for the layer's size-table
/// entry: `8 + 8 * run_count`.
pub fn encode_layer(layer: &Layer, writer: &mut ByteWriter) -> CodecResult<u32> {
    let records: Vec<RunRecord> = collapse(&layer.tiles)
        .into_iter()
        .map(Run::to_record)
        .collect();
    let size = encode_layer_frame(&layer.header(), &records, writer)?;
    Ok(size)
}

/// Encodes a layer payload into a fresh buffer.
pub fn encode_layer_to_vec(layer: &Layer) -> CodecResult<Vec<u8>> {
    let mut writer = ByteWriter::new();
    encode_layer(layer, &mut writer)?;
    Ok(writer.finish())
}
