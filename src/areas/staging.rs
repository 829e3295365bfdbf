//! Staging area
//!
//! Files waiting for the next commit. Every staged path is mirrored as a
//! small text file `staging/<relative-path>` whose content is the object ID
//! of the file's bytes at the time it was added. The whole set is dropped
//! after a successful commit; it is never versioned itself.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::Tree;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::staging::staging_target::StagingTarget;
use crate::errors::Result;
use log::{debug, warn};
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug)]
pub struct StagingArea {
    /// Path to the staging directory (`<root>/staging`)
    path: Box<Path>,
}

impl StagingArea {
    pub fn new(path: Box<Path>) -> Self {
        StagingArea { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store every resolved file of `target` and record it as staged
    ///
    /// Paths that do not exist (or are not regular files) are skipped without
    /// error. Returns the entries staged by this call.
    pub fn stage(
        &mut self,
        target: &StagingTarget,
        workspace: &Workspace,
        database: &Database,
    ) -> Result<Tree> {
        let mut staged = Tree::new();

        for path in workspace.resolve(target)? {
            let Some(data) = workspace.read_file(&path)? else {
                debug!("skipping {}: not a file in the working tree", path);
                continue;
            };

            let object_id = database.save(&data)?;
            self.record(&path, &object_id)?;
            staged.insert(path, object_id);
        }

        Ok(staged)
    }

    /// Record `path -> object_id`, replacing any entry it collides with
    pub fn record(&mut self, path: &str, object_id: &ObjectId) -> Result<()> {
        let entry_path = self.path.join(path);
        self.discard_conflicts(&entry_path)?;

        if let Some(parent) = entry_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&entry_path, object_id.to_string())?;

        Ok(())
    }

    pub fn list_staged(&self) -> Result<Tree> {
        if !self.path.exists() {
            return Ok(Tree::new());
        }

        let mut staged = Tree::new();
        for entry in WalkDir::new(&self.path).min_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(path) = self.entry_name(entry.path()) else {
                continue;
            };
            let content = std::fs::read_to_string(entry.path())?;

            match ObjectId::try_parse(content.trim()) {
                Ok(object_id) => {
                    staged.insert(path, object_id);
                }
                Err(err) => warn!("ignoring unreadable staging entry {}: {}", path, err),
            }
        }

        Ok(staged)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.list_staged()?.is_empty())
    }

    /// Remove every staging entry, leaving an empty staging directory
    pub fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_dir_all(&self.path)?;
        }
        std::fs::create_dir_all(&self.path)?;

        Ok(())
    }

    /// A file entry cannot coexist with a directory of entries at the same path
    fn discard_conflicts(&self, entry_path: &Path) -> Result<()> {
        if entry_path.is_dir() {
            std::fs::remove_dir_all(entry_path)?;
        }

        for parent in entry_path.ancestors().skip(1) {
            if parent == &*self.path {
                break;
            }
            if parent.is_file() {
                std::fs::remove_file(parent)?;
            }
        }

        Ok(())
    }

    fn entry_name(&self, entry_path: &Path) -> Option<String> {
        let relative_path = entry_path.strip_prefix(&self.path).ok()?;

        relative_path
            .components()
            .map(|component| component.as_os_str().to_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(|components| components.join("/"))
    }
}
