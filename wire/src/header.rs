//! Layer header and run record layouts.

use bytestream::{ByteReader, ByteResult, ByteWriter};

/// Size of one size-table entry in bytes.
pub const SIZE_ENTRY_SIZE: usize = 4;

/// Layer header size in bytes: id(4) + z(4).
pub const LAYER_HEADER_SIZE: usize = 4 + 4;

/// Run record size in bytes: four big-endian `i16` fields.
pub const RUN_RECORD_SIZE: usize = 2 * 4;

/// Largest count a single run record can carry.
pub const MAX_RUN_COUNT: i16 = i16::MAX;

/// The fixed header at the start of every layer payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayerHeader {
    /// Layer identifier.
    pub id: u32,
    /// Draw order.
    pub z: u32,
}

impl LayerHeader {
    #[must_use]
    pub const fn new(id: u32, z: u32) -> Self {
        Self { id, z }
    }

    /// Reads a header from the cursor.
    pub fn read(reader: &mut ByteReader<'_>) -> ByteResult<Self> {
        let id = reader.read_u32_be()?;
        let z = reader.read_u32_be()?;
        Ok(Self { id, z })
    }

    /// Writes the header to the writer.
    pub fn write(&self, writer: &mut ByteWriter) {
        writer.write_u32_be(self.id);
        writer.write_u32_be(self.z);
    }
}

/// One run as stored on disk.
///
/// No semantic checks happen here; a zero or negative `count` is passed
/// through for the codec to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RunRecord {
    pub autotile_index: i16,
    pub tileset_id: i16,
    pub tile_id: i16,
    pub count: i16,
}

impl RunRecord {
    /// Reads a run record from the cursor.
    pub fn read(reader: &mut ByteReader<'_>) -> ByteResult<Self> {
        Ok(Self {
            autotile_index: reader.read_i16_be()?,
            tileset_id: reader.read_i16_be()?,
            tile_id: reader.read_i16_be()?,
            count: reader.read_i16_be()?,
        })
    }

    /// Writes the run record to the writer.
    pub fn write(&self, writer: &mut ByteWriter) {
        writer.write_i16_be(self.autotile_index);
        writer.write_i16_be(self.tileset_id);
        writer.write_i16_be(self.tile_id);
        writer.write_i16_be(self.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_header_size_is_correct() {
        assert_eq!(LAYER_HEADER_SIZE, 8);
        assert_eq!(RUN_RECORD_SIZE, 8);
        assert_eq!(SIZE_ENTRY_SIZE, 4);
    }

    #[test]
    fn max_run_count_is_i16_max() {
        assert_eq!(MAX_RUN_COUNT, 32767);
    }

    #[test]
    fn layer_header_wire_layout() {
        let mut writer = ByteWriter::new();
        LayerHeader::new(7, 3).write(&mut writer);
        let bytes = writer.finish();
        assert_eq!(bytes, [0, 0, 0, 7, 0, 0, 0, 3]);

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(LayerHeader::read(&mut reader).unwrap(), LayerHeader::new(7, 3));
    }

    #[test]
    fn run_record_field_order() {
        let record = RunRecord {
            autotile_index: 1,
            tileset_id: 2,
            tile_id: -3,
            count: 5,
        };
        let mut writer = ByteWriter::new();
        record.write(&mut writer);
        let bytes = writer.finish();
        assert_eq!(bytes, [0, 1, 0, 2, 0xFF, 0xFD, 0, 5]);

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(RunRecord::read(&mut reader).unwrap(), record);
    }

    #[test]
    fn run_record_read_short_fails() {
        let mut reader = ByteReader::new(&[0, 1, 0, 2, 0, 3]);
        assert!(RunRecord::read(&mut reader).is_err());
    }

    #[test]
    fn header_const_constructible() {
        const HEADER: LayerHeader = LayerHeader::new(0, 0);
        assert_eq!(HEADER.id, 0);
    }
}
