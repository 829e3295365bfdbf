use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;
use std::collections::HashSet;

/// One step of a history walk
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HistoryEntry {
    pub oid: ObjectId,
    pub commit: Commit,
}

impl HistoryEntry {
    pub fn message(&self) -> &str {
        self.commit.message()
    }
}

/// Lazy walk from a commit back to the root commit, newest first
///
/// Yields `Err` at most once: either the storage error that stopped the walk
/// or `HistoryCorrupt` when a commit would be visited twice. The iterator is
/// exhausted afterwards.
#[derive(Debug)]
pub struct History<'d> {
    database: &'d Database,
    next_oid: Option<ObjectId>,
    visited: HashSet<ObjectId>,
}

impl<'d> History<'d> {
    pub fn new(database: &'d Database, start: Option<ObjectId>) -> Self {
        History {
            database,
            next_oid: start,
            visited: HashSet::new(),
        }
    }
}

impl Iterator for History<'_> {
    type Item = Result<HistoryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next_oid.take()?;

        if !self.visited.insert(oid.clone()) {
            return Some(Err(Error::HistoryCorrupt(oid)));
        }

        match self.database.load_commit(&oid) {
            Ok(commit) => {
                self.next_oid = commit.parent().cloned();
                Some(Ok(HistoryEntry::new(oid, commit)))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
