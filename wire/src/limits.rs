//! Configurable limits for bounded decoding.

/// Wire-level limits for scene decoding.
///
/// These limits are enforced before any length field is trusted, so a corrupt
/// size table cannot drive unbounded work. Tile expansion limits belong to the
/// codec crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum scene buffer size in bytes.
    pub max_scene_bytes: usize,

    /// Maximum number of declared layers.
    pub max_layers: usize,

    /// Maximum size of a single layer payload in bytes.
    pub max_layer_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Scene files seen in practice are a few hundred KB
            max_scene_bytes: 64 * 1024 * 1024,
            max_layers: 256,
            max_layer_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_scene_bytes: 4096,
            max_layers: 8,
            max_layer_bytes: 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_scene_bytes: usize::MAX,
            max_layers: usize::MAX,
            max_layer_bytes: usize::MAX,
        }
    }
}
