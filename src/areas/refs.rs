//! Branch references and the current-branch pointer
//!
//! Each branch is a text file `branches/<name>` whose only content is the
//! head commit ID, or nothing before the branch's first commit. `HEAD` is a
//! text file holding the bare name of the checked-out branch.
//!
//! Writes hold an exclusive advisory lock on the file being replaced. The
//! read-modify-write sequences built on top (commit, merge, reset) are not
//! coordinated across processes: the last writer wins.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;
use file_guard::Lock;
use log::{debug, warn};
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Refs {
    /// Repository root, holding `HEAD` and `branches/`
    path: Box<Path>,
}

impl Refs {
    pub fn save_branch(&self, name: &BranchName, head: Option<&ObjectId>) -> Result<()> {
        let content: &str = head.map_or("", |oid| oid.as_ref());
        debug!("branch {} -> {:?}", name, head.map(|oid| oid.to_short_oid()));

        self.update_ref_file(&self.branch_path(name), content)
    }

    /// Head commit of `name`, `None` while the branch has no commits
    pub fn load_branch(&self, name: &BranchName) -> Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);

        let content = match std::fs::read_to_string(&branch_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::BranchNotFound(name.clone()));
            }
            Err(err) => return Err(err.into()),
        };
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content)
            .map(Some)
            .map_err(|_| Error::CorruptRef {
                name: name.clone(),
                content: content.to_string(),
            })
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    pub fn list_branches(&self) -> Result<Vec<BranchName>> {
        let branches_path = self.branches_path();
        if !branches_path.exists() {
            return Ok(Vec::new());
        }

        let mut branches = Vec::new();
        for entry in WalkDir::new(&branches_path).min_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative_path) = entry.path().strip_prefix(&branches_path) else {
                continue;
            };
            let name = relative_path
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            match BranchName::try_parse(name) {
                Ok(branch) => branches.push(branch),
                Err(err) => warn!("ignoring unreadable branch entry: {}", err),
            }
        }
        branches.sort();

        Ok(branches)
    }

    pub fn read_head(&self) -> Result<BranchName> {
        let content = std::fs::read_to_string(self.head_path())?;

        BranchName::try_parse(content.trim())
    }

    pub fn set_head(&self, name: &BranchName) -> Result<()> {
        self.update_ref_file(&self.head_path(), name.as_ref())
    }

    pub fn head_exists(&self) -> bool {
        self.head_path().is_file()
    }

    fn update_ref_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(content.as_bytes())?;

        Ok(())
    }

    fn branch_path(&self, name: &BranchName) -> Box<Path> {
        self.branches_path().join(name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(crate::areas::HEAD_FILE).into_boxed_path()
    }

    pub fn branches_path(&self) -> Box<Path> {
        self.path.join(crate::areas::BRANCHES_DIR).into_boxed_path()
    }
}
