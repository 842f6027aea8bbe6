//! Error types for codec operations.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding, encoding, or editing a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Scene framing error.
    Wire(wire::DecodeError),

    /// A length did not fit its on-disk field.
    Encode(wire::EncodeError),

    /// A run record carried a count below one.
    InvalidRunCount { layer: usize, run: usize, count: i16 },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// A tile edit supplied a value that is not a valid `i16`.
    InvalidTileInput { field: TileField, reason: InputReason },

    /// Tile text did not have exactly three comma-separated fields.
    MalformedTileText { fields: usize },

    /// Layer index out of range for the scene.
    LayerNotFound { index: usize, layer_count: usize },

    /// Tile index out of range for the layer.
    TileNotFound {
        layer: usize,
        index: usize,
        tile_count: usize,
    },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    TilesPerLayer,
    TilesPerScene,
}

/// The tile field an edit value was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileField {
    AutotileIndex,
    TilesetId,
    TileId,
}

/// Why an edit value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputReason {
    Empty,
    NotInteger,
    OutOfRange { value: i64 },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::Encode(e) => write!(f, "encode error: {e}"),
            Self::InvalidRunCount { layer, run, count } => {
                write!(f, "invalid run count {count} in layer {layer} run {run}")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::InvalidTileInput { field, reason } => {
                write!(f, "invalid {field}: {reason}")
            }
            Self::MalformedTileText { fields } => {
                write!(f, "expected 3 comma-separated tile fields, found {fields}")
            }
            Self::LayerNotFound { index, layer_count } => {
                write!(f, "layer {index} not found (scene has {layer_count} layers)")
            }
            Self::TileNotFound {
                layer,
                index,
                tile_count,
            } => {
                write!(
                    f,
                    "tile {index} not found in layer {layer} ({tile_count} tiles)"
                )
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TilesPerLayer => "tiles per layer",
            Self::TilesPerScene => "tiles per scene",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for TileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AutotileIndex => "autotile index",
            Self::TilesetId => "tileset id",
            Self::TileId => "tile id",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for InputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "value is empty"),
            Self::NotInteger => write!(f, "value is not an integer"),
            Self::OutOfRange { value } => {
                write!(f, "value {value} is outside [{}, {}]", i16::MIN, i16::MAX)
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) => Some(e),
            Self::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for CodecError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Wire(err)
    }
}

impl From<wire::EncodeError> for CodecError {
    fn from(err: wire::EncodeError) -> Self {
        Self::Encode(err)
    }
}
