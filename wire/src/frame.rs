//! Size-table framing and layer payload slicing.

use bytestream::{ByteReader, ByteWriter};

use crate::error::{
    DecodeError, EncodeError, LengthKind, LimitKind, Region, TruncationReason, WireResult,
};
use crate::header::{LayerHeader, RunRecord, LAYER_HEADER_SIZE, RUN_RECORD_SIZE, SIZE_ENTRY_SIZE};
use crate::limits::Limits;

/// A layer payload split into its header and run area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerFrame<'a> {
    pub header: LayerHeader,
    /// Run records, a whole multiple of [`RUN_RECORD_SIZE`] bytes.
    pub body: &'a [u8],
}

impl<'a> LayerFrame<'a> {
    /// Total payload size including the header.
    #[must_use]
    pub const fn size(&self) -> usize {
        LAYER_HEADER_SIZE + self.body.len()
    }

    #[must_use]
    pub const fn run_count(&self) -> usize {
        self.body.len() / RUN_RECORD_SIZE
    }

    /// Iterates the raw run records in stored order.
    #[must_use]
    pub const fn runs(&self) -> RunRecords<'a> {
        RunRecords {
            reader: ByteReader::new(self.body),
        }
    }
}

/// Iterator over the run records of a [`LayerFrame`].
#[derive(Debug, Clone)]
pub struct RunRecords<'a> {
    reader: ByteReader<'a>,
}

impl Iterator for RunRecords<'_> {
    type Item = RunRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reader.remaining() < RUN_RECORD_SIZE {
            return None;
        }
        RunRecord::read(&mut self.reader).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.reader.remaining() / RUN_RECORD_SIZE;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RunRecords<'_> {}

/// A scene buffer split into its size table and layer frames.
///
/// Layer bodies borrow from the input buffer; nothing is copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneFrame<'a> {
    /// Declared payload size of each layer, in table order.
    pub sizes: Vec<u32>,
    pub layers: Vec<LayerFrame<'a>>,
    /// Bytes left after the last declared layer.
    pub trailing_bytes: usize,
}

/// Reads `layer_count` big-endian size entries from the start of the cursor.
pub fn decode_size_table(
    reader: &mut ByteReader<'_>,
    layer_count: usize,
    limits: &Limits,
) -> WireResult<Vec<u32>> {
    if layer_count > limits.max_layers {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::LayerCount,
            limit: limits.max_layers,
            actual: layer_count,
        });
    }
    let needed = layer_count.saturating_mul(SIZE_ENTRY_SIZE);
    if needed > reader.remaining() {
        return Err(DecodeError::BufferExhausted {
            region: Region::SizeTable,
            needed,
            available: reader.remaining(),
        });
    }

    let mut sizes = Vec::with_capacity(layer_count);
    for _ in 0..layer_count {
        let size = reader
            .read_u32_be()
            .map_err(|_| DecodeError::BufferExhausted {
                region: Region::SizeTable,
                needed,
                available: reader.remaining(),
            })?;
        sizes.push(size);
    }
    Ok(sizes)
}

/// Splits one layer payload (exactly its declared size) into header and runs.
pub fn decode_layer_frame(payload: &[u8], layer: usize) -> WireResult<LayerFrame<'_>> {
    let mut reader = ByteReader::new(payload);
    let header = LayerHeader::read(&mut reader).map_err(|_| DecodeError::TruncatedLayer {
        layer,
        size: payload.len(),
        reason: TruncationReason::MissingHeader,
    })?;

    let body = reader.rest();
    let remainder = body.len() % RUN_RECORD_SIZE;
    if remainder != 0 {
        return Err(DecodeError::TruncatedLayer {
            layer,
            size: payload.len(),
            reason: TruncationReason::MisalignedRuns { remainder },
        });
    }

    Ok(LayerFrame { header, body })
}

/// Decodes the size table and slices every declared layer out of `buf`.
///
/// `layer_count` must come from the caller: the format does not record it.
/// Trailing bytes are reported in [`SceneFrame::trailing_bytes`], not as an
/// error; callers decide whether to tolerate them.
pub fn decode_scene_frame<'a>(
    buf: &'a [u8],
    layer_count: usize,
    limits: &Limits,
) -> WireResult<SceneFrame<'a>> {
    if buf.len() > limits.max_scene_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::SceneBytes,
            limit: limits.max_scene_bytes,
            actual: buf.len(),
        });
    }

    let mut reader = ByteReader::new(buf);
    let sizes = decode_size_table(&mut reader, layer_count, limits)?;

    let mut layers = Vec::with_capacity(layer_count);
    for (index, &size) in sizes.iter().enumerate() {
        let size = size as usize;
        if size > limits.max_layer_bytes {
            return Err(DecodeError::LimitsExceeded {
                kind: LimitKind::LayerBytes,
                limit: limits.max_layer_bytes,
                actual: size,
            });
        }
        let available = reader.remaining();
        let payload = reader
            .read_bytes(size)
            .map_err(|_| DecodeError::BufferExhausted {
                region: Region::Layer(index),
                needed: size,
                available,
            })?;
        layers.push(decode_layer_frame(payload, index)?);
    }

    Ok(SceneFrame {
        sizes,
        layers,
        trailing_bytes: reader.remaining(),
    })
}

/// Returns the payload size of a layer holding `run_count` runs.
pub fn layer_payload_size(run_count: usize) -> Result<u32, EncodeError> {
    run_count
        .checked_mul(RUN_RECORD_SIZE)
        .and_then(|bytes| bytes.checked_add(LAYER_HEADER_SIZE))
        .and_then(|bytes| u32::try_from(bytes).ok())
        .ok_or(EncodeError::LengthOverflow {
            what: LengthKind::RunCount,
            length: run_count,
        })
}

/// Writes a layer payload and returns its size for the size table.
pub fn encode_layer_frame(
    header: &LayerHeader,
    runs: &[RunRecord],
    writer: &mut ByteWriter,
) -> Result<u32, EncodeError> {
    let size = layer_payload_size(runs.len())?;
    header.write(writer);
    for run in runs {
        run.write(writer);
    }
    Ok(size)
}

/// Writes the size table followed by the layer payloads, in order.
pub fn encode_scene_frame<P: AsRef<[u8]>>(
    payloads: &[P],
    writer: &mut ByteWriter,
) -> Result<(), EncodeError> {
    for payload in payloads {
        let len = payload.as_ref().len();
        let size = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow {
            what: LengthKind::LayerPayload,
            length: len,
        })?;
        writer.write_u32_be(size);
    }
    for payload in payloads {
        writer.write_bytes(payload.as_ref());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_bytes(id: u32, z: u32, runs: &[RunRecord]) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        encode_layer_frame(&LayerHeader::new(id, z), runs, &mut writer).unwrap();
        writer.finish()
    }

    fn run(a: i16, t: i16, id: i16, count: i16) -> RunRecord {
        RunRecord {
            autotile_index: a,
            tileset_id: t,
            tile_id: id,
            count,
        }
    }

    #[test]
    fn layer_frame_single_run_size() {
        let bytes = layer_bytes(7, 3, &[run(1, 2, 3, 5)]);
        assert_eq!(bytes.len(), 16);

        let frame = decode_layer_frame(&bytes, 0).unwrap();
        assert_eq!(frame.header, LayerHeader::new(7, 3));
        assert_eq!(frame.size(), 16);
        assert_eq!(frame.run_count(), 1);
        assert_eq!(frame.runs().collect::<Vec<_>>(), vec![run(1, 2, 3, 5)]);
    }

    #[test]
    fn layer_frame_empty_body() {
        let bytes = layer_bytes(1, 0, &[]);
        let frame = decode_layer_frame(&bytes, 0).unwrap();
        assert_eq!(frame.run_count(), 0);
        assert_eq!(frame.runs().len(), 0);
    }

    #[test]
    fn layer_frame_rejects_short_header() {
        let err = decode_layer_frame(&[0, 0, 0, 1], 4).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedLayer {
                layer: 4,
                size: 4,
                reason: TruncationReason::MissingHeader,
            }
        );
    }

    #[test]
    fn layer_frame_rejects_misaligned_runs() {
        let mut bytes = layer_bytes(1, 0, &[run(0, 0, 0, 1)]);
        bytes.extend_from_slice(&[0, 0, 0]);
        let err = decode_layer_frame(&bytes, 1).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TruncatedLayer {
                layer: 1,
                reason: TruncationReason::MisalignedRuns { remainder: 3 },
                ..
            }
        ));
    }

    #[test]
    fn scene_frame_two_layers() {
        let l0 = layer_bytes(1, 0, &[run(0, 1, 2, 3)]);
        let l1 = layer_bytes(2, 1, &[]);
        let mut writer = ByteWriter::new();
        encode_scene_frame(&[l0.clone(), l1.clone()], &mut writer).unwrap();
        let buf = writer.finish();
        assert_eq!(&buf[0..8], &[0, 0, 0, 16, 0, 0, 0, 8]);

        let frame = decode_scene_frame(&buf, 2, &Limits::for_testing()).unwrap();
        assert_eq!(frame.sizes, vec![16, 8]);
        assert_eq!(frame.layers.len(), 2);
        assert_eq!(frame.layers[0].header.id, 1);
        assert_eq!(frame.layers[1].header, LayerHeader::new(2, 1));
        assert_eq!(frame.trailing_bytes, 0);
    }

    #[test]
    fn scene_frame_reports_trailing_bytes() {
        let l0 = layer_bytes(1, 0, &[]);
        let mut writer = ByteWriter::new();
        encode_scene_frame(&[l0], &mut writer).unwrap();
        writer.write_bytes(&[0xAA, 0xBB]);
        let buf = writer.finish();

        let frame = decode_scene_frame(&buf, 1, &Limits::for_testing()).unwrap();
        assert_eq!(frame.trailing_bytes, 2);
    }

    #[test]
    fn scene_frame_size_table_exhausted() {
        let err = decode_scene_frame(&[0, 0, 0, 8, 0, 0], 2, &Limits::for_testing()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::BufferExhausted {
                region: Region::SizeTable,
                needed: 8,
                available: 6,
            }
        );
    }

    #[test]
    fn scene_frame_layer_exhausted() {
        let l0 = layer_bytes(1, 0, &[run(0, 0, 0, 1)]);
        let mut writer = ByteWriter::new();
        encode_scene_frame(&[l0], &mut writer).unwrap();
        let mut buf = writer.finish();
        buf.truncate(buf.len() - 4);

        let err = decode_scene_frame(&buf, 1, &Limits::for_testing()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::BufferExhausted {
                region: Region::Layer(0),
                needed: 16,
                available: 12,
            }
        );
    }

    #[test]
    fn scene_frame_zero_layers_all_trailing() {
        let frame = decode_scene_frame(&[1, 2, 3], 0, &Limits::for_testing()).unwrap();
        assert!(frame.layers.is_empty());
        assert_eq!(frame.trailing_bytes, 3);
    }

    #[test]
    fn scene_frame_enforces_limits() {
        let limits = Limits {
            max_scene_bytes: 4096,
            max_layers: 1,
            max_layer_bytes: 1024,
        };
        let err = decode_scene_frame(&[0; 16], 2, &limits).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::LimitsExceeded {
                kind: LimitKind::LayerCount,
                ..
            }
        ));

        let err = decode_scene_frame(&[0xFF; 8], 1, &limits).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::LimitsExceeded {
                kind: LimitKind::LayerBytes,
                ..
            }
        ));

        let big = vec![0u8; 4097];
        let err = decode_scene_frame(&big, 1, &limits).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::LimitsExceeded {
                kind: LimitKind::SceneBytes,
                ..
            }
        ));
    }

    #[test]
    fn payload_size_arithmetic() {
        assert_eq!(layer_payload_size(0).unwrap(), 8);
        assert_eq!(layer_payload_size(1).unwrap(), 16);
        assert_eq!(layer_payload_size(3).unwrap(), 32);
        assert!(layer_payload_size(usize::MAX).is_err());
    }
}
