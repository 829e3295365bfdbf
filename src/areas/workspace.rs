use crate::areas::IGNORED_PATHS;
use crate::artifacts::staging::staging_target::StagingTarget;
use crate::errors::Result;
use log::debug;
use std::path::{Component, Path};

/// Working tree rooted at the repository directory
///
/// The repository's own bookkeeping (`HEAD`, `objects/`, `branches/`,
/// `staging/`) lives in the same directory and is never treated as
/// working-tree content.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a staging target into `/`-separated relative paths
    ///
    /// An explicit path naming the root itself (`.`) stands for every file
    /// directly under it. Explicit paths that point outside the root, or into
    /// the repository's own bookkeeping, are dropped. Whether the remaining
    /// paths exist is checked later, when they are read.
    pub fn resolve(&self, target: &StagingTarget) -> Result<Vec<String>> {
        let paths = match target {
            StagingTarget::AllFiles => return self.list_root_files(),
            StagingTarget::ExplicitPaths(paths) => paths,
        };

        let mut resolved = Vec::new();
        for path in paths {
            let selected = if self.is_root(path) {
                self.list_root_files()?
            } else if let Some(relative) = self.to_relative(path) {
                vec![relative]
            } else {
                debug!("skipping path outside the working tree: {}", path.display());
                continue;
            };

            for relative in selected {
                if !resolved.contains(&relative) {
                    resolved.push(relative);
                }
            }
        }

        Ok(resolved)
    }

    /// Regular files directly under the root, sorted by name
    pub fn list_root_files(&self) -> Result<Vec<String>> {
        let mut files = std::fs::read_dir(&self.path)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|file_type| file_type.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !Self::is_ignored(name))
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    /// Bytes of a working-tree file, `None` if it is missing or not a regular file
    pub fn read_file(&self, relative_path: &str) -> Result<Option<Vec<u8>>> {
        let file_path = self.path.join(relative_path);

        if !file_path.is_file() {
            return Ok(None);
        }

        Ok(Some(std::fs::read(file_path)?))
    }

    fn to_relative(&self, path: &Path) -> Option<String> {
        let path = if path.is_absolute() {
            path.strip_prefix(&self.path).ok()?
        } else {
            path
        };

        let mut components = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(name) => components.push(name.to_str()?.to_string()),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        match components.first() {
            None => None,
            Some(first) if Self::is_ignored(first) => None,
            Some(_) => Some(components.join("/")),
        }
    }

    fn is_root(&self, path: &Path) -> bool {
        if path.is_absolute() {
            return path == &*self.path;
        }

        path.components().next().is_some()
            && path
                .components()
                .all(|component| component == Component::CurDir)
    }

    fn is_ignored(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }
}
