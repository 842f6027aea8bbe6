#![no_main]

use bytestream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Input bytes pick a bounded sequence of reads over the same buffer.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 4;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_u32_be();
            }
            1 => {
                let _ = reader.read_i16_be();
            }
            2 => {
                let len = usize::from(data[idx.saturating_sub(1)] % 32);
                let _ = reader.read_bytes(len);
            }
            _ => {
                let _ = reader.skip(1);
            }
        }
        assert!(reader.position() <= data.len());
    }
});
