//! Whole-scene decoding and encoding.

use bytestream::ByteWriter;
use tracing::warn;
use wire::{decode_scene_frame, encode_scene_frame, SceneFrame, SIZE_ENTRY_SIZE};

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::layer::{decode_layer, encode_layer_to_vec, expanded_len};
use crate::limits::CodecLimits;
use crate::types::Scene;

/// What to do with bytes left after the last declared layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBytesPolicy {
    /// Log a warning and return the decoded layers.
    #[default]
    Warn,
    /// Fail with [`wire::DecodeError::TrailingBytes`].
    Reject,
}

/// Options for [`decode_scene_with`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub wire_limits: wire::Limits,
    pub limits: CodecLimits,
    pub trailing_bytes: TrailingBytesPolicy,
}

impl DecodeOptions {
    /// Options that reject trailing bytes.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            trailing_bytes: TrailingBytesPolicy::Reject,
            ..Self::default()
        }
    }
}

/// Decodes a scene with default limits, tolerating trailing bytes.
///
/// `layer_count` is required: the format has no embedded layer count. A wrong
/// count usually surfaces as a framing error partway through the buffer.
pub fn decode_scene(bytes: &[u8], layer_count: usize) -> CodecResult<Scene> {
    decode_scene_with(bytes, layer_count, &DecodeOptions::default())
}

/// Decodes a scene with explicit options.
///
/// Either every declared layer decodes or an error is returned; no partial
/// scene is ever produced. The whole buffer is framed before any run is
/// read, so a framing error in a later layer is reported ahead of an invalid
/// run in an earlier one.
pub fn decode_scene_with(
    bytes: &[u8],
    layer_count: usize,
    options: &DecodeOptions,
) -> CodecResult<Scene> {
    let frame = decode_scene_frame(bytes, layer_count, &options.wire_limits)?;
    decode_scene_from_frame(&frame, options)
}

/// Decodes a scene from an already framed buffer.
///
/// Layers decode in order. The running tile total is checked against
/// `max_tiles_per_scene` before each layer is expanded.
pub fn decode_scene_from_frame(
    frame: &SceneFrame<'_>,
    options: &DecodeOptions,
) -> CodecResult<Scene> {
    let limits = &options.limits;
    let mut scene_tiles = 0usize;
    let mut layers = Vec::with_capacity(frame.layers.len());
    for (index, layer) in frame.layers.iter().enumerate() {
        scene_tiles = scene_tiles.saturating_add(expanded_len(layer));
        if scene_tiles > limits.max_tiles_per_scene {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::TilesPerScene,
                limit: limits.max_tiles_per_scene,
                actual: scene_tiles,
            });
        }
        layers.push(decode_layer(layer, index, limits)?);
    }

    if frame.trailing_bytes > 0 {
        match options.trailing_bytes {
            TrailingBytesPolicy::Reject => {
                return Err(CodecError::Wire(wire::DecodeError::TrailingBytes {
                    count: frame.trailing_bytes,
                }));
            }
            TrailingBytesPolicy::Warn => {
                warn!(
                    trailing_bytes = frame.trailing_bytes,
                    layers = layers.len(),
                    "bytes remain after the last declared layer"
                );
            }
        }
    }

    Ok(Scene { layers })
}

/// Encodes a scene: size table, then each layer payload in order.
///
/// For a scene decoded from `buf` and left unmodified, the output equals
/// `buf` byte for byte, unless the original held runs longer than the
/// format allows.
pub fn encode_scene(scene: &Scene) -> CodecResult<Vec<u8>> {
    let mut out = Vec::new();
    encode_scene_into(scene, &mut out)?;
    Ok(out)
}

/// Encodes a scene and appends it to `out`.
pub fn encode_scene_into(scene: &Scene, out: &mut Vec<u8>) -> CodecResult<()> {
    let payloads = scene
        .layers
        .iter()
        .map(encode_layer_to_vec)
        .collect::<CodecResult<Vec<_>>>()?;

    let total = payloads.len() * SIZE_ENTRY_SIZE + payloads.iter().map(Vec::len).sum::<usize>();
    let mut writer = ByteWriter::with_capacity(total);
    encode_scene_frame(&payloads, &mut writer)?;
    writer.finish_into(out);
    Ok(())
}
