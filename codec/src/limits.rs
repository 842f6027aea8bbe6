//! Limits for codec-level decoding.

/// Codec-specific limits enforced while expanding runs.
///
/// A single run can stand for up to 32767 tiles, so the expanded size of a
/// layer is checked before any tile is materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum number of expanded tiles in one layer.
    pub max_tiles_per_layer: usize,
    /// Maximum number of expanded tiles across all layers of a scene.
    pub max_tiles_per_scene: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_tiles_per_layer: 16 * 1024 * 1024,
            max_tiles_per_scene: 32 * 1024 * 1024,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_tiles_per_layer: 4096,
            max_tiles_per_scene: 16384,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_tiles_per_layer: usize::MAX,
            max_tiles_per_scene: usize::MAX,
        }
    }
}
