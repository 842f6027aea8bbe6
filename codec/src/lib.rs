//! Run-length layer encoding/decoding for scn tile-map scene files.
//!
//! This is the main codec crate. It ties together bytestream and wire to turn a
//! scene buffer into editable layers of tiles and back.
//!
//! # Features
//!
//! - Scene decoding with a caller-supplied layer count
//! - Run expansion and greedy adjacent-run collapse, split at 32767
//! - Byte-identical re-encoding of unmodified scenes
//! - Validated single-tile edits
//! - Derived display colors for presentation layers
//!
//! # Design Principles
//!
//! - **Correctness first** - Decoding is atomic: a scene decodes fully or not at all.
//! - **Bounded expansion** - Expanded tile counts, per layer and per scene, are checked before allocation.
//! - **Deterministic** - Same layers produce the same bytes.
//!
//! # Example
//!
//! ```
//! use codec::{decode_scene, encode_scene, replace_tile, Layer, Scene, Tile};
//!
//! let scene = Scene::new(vec![Layer::with_tiles(7, 3, vec![Tile::new(1, 2, 3); 5])]);
//! let bytes = encode_scene(&scene).unwrap();
//! assert_eq!(bytes.len(), 4 + 16);
//!
//! let mut decoded = decode_scene(&bytes, 1).unwrap();
//! assert_eq!(decoded, scene);
//!
//! replace_tile(&mut decoded, 0, 4, "0,0,9".parse().unwrap()).unwrap();
//! assert_eq!(encode_scene(&decoded).unwrap().len(), 4 + 24);
//! ```

mod color;
mod edit;
mod error;
mod layer;
mod limits;
mod run;
mod scene;
mod types;

pub use color::{display_color, string_hash};
pub use edit::{parse_tile_field, parse_tile_input, replace_tile};
pub use error::{CodecError, CodecResult, InputReason, LimitKind, TileField};
pub use layer::{decode_layer, encode_layer, encode_layer_to_vec};
pub use limits::CodecLimits;
pub use run::{collapse, expand, expand_into, Run};
pub use scene::{
    decode_scene, decode_scene_from_frame, decode_scene_with, encode_scene, encode_scene_into,
    DecodeOptions, TrailingBytesPolicy,
};
pub use types::{Layer, Scene, Tile};
pub use wire::{Limits as WireLimits, MAX_RUN_COUNT};
