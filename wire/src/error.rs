//! Error types for scene framing operations.

use std::fmt;

/// Result type for scene framing operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// High-level decode errors for scene framing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Fewer bytes are present than the size table promises.
    BufferExhausted {
        region: Region,
        needed: usize,
        available: usize,
    },

    /// A layer payload does not hold a header plus whole run records.
    TruncatedLayer {
        layer: usize,
        size: usize,
        reason: TruncationReason,
    },

    /// Bytes remain after the last declared layer.
    TrailingBytes { count: usize },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// The part of a scene buffer that was being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SizeTable,
    Layer(usize),
}

/// Why a layer payload could not be split into runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationReason {
    /// Payload is shorter than the 8-byte layer header.
    MissingHeader,
    /// Run area length is not a multiple of the run record size.
    MisalignedRuns { remainder: usize },
}

/// Specific wire limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    SceneBytes,
    LayerCount,
    LayerBytes,
}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    LengthOverflow { what: LengthKind, length: usize },
}

/// Length fields that are stored as `u32` on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthKind {
    LayerPayload,
    RunCount,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferExhausted {
                region,
                needed,
                available,
            } => {
                write!(
                    f,
                    "buffer exhausted reading {region}: need {needed} bytes, have {available}"
                )
            }
            Self::TruncatedLayer {
                layer,
                size,
                reason,
            } => {
                write!(f, "truncated layer {layer} ({size} bytes): {reason}")
            }
            Self::TrailingBytes { count } => {
                write!(f, "{count} trailing bytes after last declared layer")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeTable => write!(f, "size table"),
            Self::Layer(index) => write!(f, "layer {index}"),
        }
    }
}

impl fmt::Display for TruncationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "payload shorter than layer header"),
            Self::MisalignedRuns { remainder } => {
                write!(f, "{remainder} bytes left over after the last whole run")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SceneBytes => "scene bytes",
            Self::LayerCount => "layer count",
            Self::LayerBytes => "layer bytes",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthOverflow { what, length } => {
                write!(f, "{what} length overflow: {length} does not fit in u32")
            }
        }
    }
}

impl fmt::Display for LengthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LayerPayload => "layer payload",
            Self::RunCount => "run count",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for DecodeError {}

impl std::error::Error for EncodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display_buffer_exhausted() {
        let err = DecodeError::BufferExhausted {
            region: Region::Layer(2),
            needed: 24,
            available: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("layer 2"));
        assert!(msg.contains("24"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn decode_error_display_truncated_layer() {
        let err = DecodeError::TruncatedLayer {
            layer: 0,
            size: 13,
            reason: TruncationReason::MisalignedRuns { remainder: 5 },
        };
        let msg = err.to_string();
        assert!(msg.contains("truncated layer 0"));
        assert!(msg.contains("13 bytes"));
        assert!(msg.contains("5 bytes left over"));
    }

    #[test]
    fn decode_error_display_limits_exceeded() {
        let err = DecodeError::LimitsExceeded {
            kind: LimitKind::LayerCount,
            limit: 4,
            actual: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("layer count"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn size_table_region_display() {
        let err = DecodeError::BufferExhausted {
            region: Region::SizeTable,
            needed: 8,
            available: 3,
        };
        assert!(err.to_string().contains("size table"));
    }

    #[test]
    fn encode_error_display() {
        let err = EncodeError::LengthOverflow {
            what: LengthKind::LayerPayload,
            length: usize::MAX,
        };
        let msg = err.to_string();
        assert!(msg.contains("layer payload"));
        assert!(msg.contains("u32"));
    }
}
