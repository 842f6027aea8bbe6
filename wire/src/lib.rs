//! Scene file framing and layer layout for the scn codec.
//!
//! This crate handles the binary layout of scene files: the leading size
//! table, the per-layer header, and the fixed-size run records. It does not
//! know what a tile is; run records pass through with their raw values.
//!
//! # Layout
//!
//! ```text
//! [ size_0: u32 ] ... [ size_{n-1}: u32 ]          n supplied by the caller
//! [ layer_0 payload: size_0 bytes ] ...
//!
//! layer payload:
//! [ id: u32 ][ z: u32 ]
//! [ autotile: i16 ][ tileset: i16 ][ tile: i16 ][ count: i16 ]   repeated
//! ```
//!
//! All integers are big-endian.
//!
//! # Design Principles
//!
//! - **Bounded decoding** - Every length field is checked against the buffer and limits.
//! - **Zero copy** - Decoded frames borrow layer bodies from the input.
//! - **No domain knowledge** - This crate handles framing, not tile semantics.

mod error;
mod frame;
mod header;
mod limits;

pub use error::{
    DecodeError, EncodeError, LengthKind, LimitKind, Region, TruncationReason, WireResult,
};
pub use frame::{
    decode_layer_frame, decode_scene_frame, decode_size_table, encode_layer_frame,
    encode_scene_frame, layer_payload_size, LayerFrame, RunRecords, SceneFrame,
};
pub use header::{
    LayerHeader, RunRecord, LAYER_HEADER_SIZE, MAX_RUN_COUNT, RUN_RECORD_SIZE, SIZE_ENTRY_SIZE,
};
pub use limits::Limits;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = LAYER_HEADER_SIZE;
        let _ = RUN_RECORD_SIZE;
        let _ = SIZE_ENTRY_SIZE;
        let _ = MAX_RUN_COUNT;
        let _ = LayerHeader::new(0, 0);
        let _ = RunRecord::default();
        let _ = Limits::default();

        // Error types
        let _: WireResult<()> = Ok(());
    }

    #[test]
    fn header_size_constant_correct() {
        assert_eq!(
            LAYER_HEADER_SIZE,
            size_of::<u32>() // id
                + size_of::<u32>() // z
        );
        assert_eq!(RUN_RECORD_SIZE, 4 * size_of::<i16>());
    }

    #[test]
    fn limits_default_is_reasonable() {
        let limits = Limits::default();
        assert!(limits.max_layers >= 16, "should allow typical layer stacks");
        assert!(
            limits.max_layer_bytes >= 64 * 1024,
            "should allow large layers"
        );
    }
}
