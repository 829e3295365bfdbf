use crate::errors::Result;
use bytes::Bytes;
use std::io::BufRead;

/// Records that can be written into the object store
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Records that can be read back from the raw (decompressed) bytes of an object
///
/// Decoding failures are reported as `std::io::Error` so the object store can
/// attach the offending object ID when turning them into `CorruptObject`.
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> std::io::Result<Self>
    where
        Self: Sized;
}
