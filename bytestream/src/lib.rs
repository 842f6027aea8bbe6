//! Bounded big-endian byte cursor primitives for the scn codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for byte-level encoding
//! and decoding of the big-endian integers that make up scene files.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - Every read checks the remaining length before consuming.
//! - **No domain knowledge** - This crate knows nothing about layers, runs, or tiles.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u32_be(16);
//! writer.write_i16_be(-3);
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes, [0, 0, 0, 16, 0xFF, 0xFD]);
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u32_be().unwrap(), 16);
//! assert_eq!(reader.read_i16_be().unwrap(), -3);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;
