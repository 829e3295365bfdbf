//! Content-addressed object store
//!
//! Objects are zlib-compressed and identified by the SHA-1 of the compressed
//! bytes (compress first, then hash). Each object is a single flat file
//! `objects/<sha>`; once written it is never modified.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::Bytes;
use fake::rand;
use log::debug;
use sha1::{Digest, Sha1};
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Compress and hash `data` without touching the disk
    pub fn hash(&self, data: &[u8]) -> Result<ObjectId> {
        let compressed = Self::compress(data)?;
        Self::digest(&compressed)
    }

    /// Store `data` and return its object ID
    ///
    /// Saving the same bytes twice yields the same ID; the second call finds
    /// the object file already present and leaves it untouched.
    pub fn save(&self, data: &[u8]) -> Result<ObjectId> {
        let compressed = Self::compress(data)?;
        let object_id = Self::digest(&compressed)?;
        let object_path = self.object_path(&object_id);

        if object_path.exists() {
            debug!("object {} already stored", object_id);
            return Ok(object_id);
        }

        std::fs::create_dir_all(&self.path)?;
        self.write_object(&object_path, &compressed)?;
        debug!("stored object {} ({} bytes)", object_id, data.len());

        Ok(object_id)
    }

    /// Load and decompress the object stored under `object_id`
    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.object_path(object_id);

        let compressed = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound(object_id.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        Self::decompress(&compressed).map_err(|err| Error::corrupt(object_id, err))
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    pub fn store_commit(&self, commit: &Commit) -> Result<ObjectId> {
        self.save(&commit.serialize()?)
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        let content = self.load(object_id)?;

        Commit::deserialize(Cursor::new(content)).map_err(|err| Error::corrupt(object_id, err))
    }

    fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    fn write_object(&self, object_path: &Path, content: &[u8]) -> Result<()> {
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)?;
        file.write_all(content)?;
        drop(file);

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path)?;

        Ok(())
    }

    fn digest(compressed: &[u8]) -> Result<ObjectId> {
        let mut hasher = Sha1::new();
        hasher.update(compressed);

        ObjectId::from_digest(&hasher.finalize())
    }

    fn compress(data: &[u8]) -> Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;

        Ok(encoder.finish()?)
    }

    fn decompress(data: &[u8]) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
