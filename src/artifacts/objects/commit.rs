//! Commit record
//!
//! A commit is a message, an optional parent commit and the tree of files it
//! snapshots. It is stored as a JSON object inside the object store:
//!
//! ```text
//! {"message":"<msg>","parent":"<sha>"|null,"files":{"<path>":"<sha>",...}}
//! ```
//!
//! Keys are written in that order and file paths are sorted, so the same
//! record always serializes to the same bytes and therefore the same ID.

use crate::artifacts::objects::Tree;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, new)]
pub struct Commit {
    message: String,
    /// Previous commit on the branch, `None` for a root commit
    parent: Option<ObjectId>,
    files: Tree,
}

impl Commit {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message, used by one-line displays
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn files(&self) -> &Tree {
        &self.files
    }

    pub fn into_files(self) -> Tree {
        self.files
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Result<Bytes> {
        let content = serde_json::to_vec(self).map_err(std::io::Error::from)?;
        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> std::io::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
