use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::Workspace;
use crate::areas::{DEFAULT_BRANCH, OBJECTS_DIR, STAGING_DIR};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::history::History;
use crate::artifacts::objects::Tree;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use anyhow::Context;
use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Repository context threaded through every operation
///
/// Holds the repository root, every storage area and the name of the
/// checked-out branch. The branch name is read from `HEAD` once when the
/// context is opened and kept in sync by `checkout` and `init`.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    staging: Arc<Mutex<StagingArea>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    current_branch: RefCell<BranchName>,
}

impl Repository {
    /// Open the repository at `path`, which must already exist
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if !path.is_dir() {
            anyhow::bail!("repository directory {} does not exist", path.display());
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve repository path {}", path.display()))?;

        let staging = StagingArea::new(path.join(STAGING_DIR).into_boxed_path());
        let database = Database::new(path.join(OBJECTS_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(path.clone().into_boxed_path());

        let current_branch = if refs.head_exists() {
            refs.read_head().context("Unable to read HEAD")?
        } else {
            BranchName::try_parse(DEFAULT_BRANCH)?
        };

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            staging: Arc::new(Mutex::new(staging)),
            database,
            workspace,
            refs,
            current_branch: RefCell::new(current_branch),
        })
    }

    /// Like `new`, but creates the repository directory first when missing
    pub fn create(path: impl AsRef<Path>, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        std::fs::create_dir_all(path)
            .with_context(|| format!("Unable to create repository directory {}", path.display()))?;

        Self::new(path, writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn staging(&self) -> Arc<Mutex<StagingArea>> {
        self.staging.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn current_branch(&self) -> Ref<'_, BranchName> {
        self.current_branch.borrow()
    }

    pub fn set_current_branch(&self, branch: BranchName) {
        *self.current_branch.borrow_mut() = branch;
    }

    /// Head commit of the checked-out branch, `None` before its first commit
    pub fn head(&self) -> crate::errors::Result<Option<ObjectId>> {
        let branch = self.current_branch().clone();
        self.refs.load_branch(&branch)
    }

    /// Like `head`, but a checked-out branch without a ref file counts as empty
    pub fn current_head_or_none(&self) -> crate::errors::Result<Option<ObjectId>> {
        match self.head() {
            Err(Error::BranchNotFound(_)) => Ok(None),
            other => other,
        }
    }

    pub fn load_commit(&self, oid: &ObjectId) -> crate::errors::Result<Commit> {
        self.database.load_commit(oid)
    }

    /// Files recorded by `oid`, or the empty tree when there is no commit
    pub fn load_tree(&self, oid: Option<&ObjectId>) -> crate::errors::Result<Tree> {
        match oid {
            Some(oid) => Ok(self.load_commit(oid)?.into_files()),
            None => Ok(Tree::new()),
        }
    }

    /// Lazy newest-first history starting at `start`
    pub fn list_history(&self, start: Option<ObjectId>) -> History<'_> {
        History::new(&self.database, start)
    }
}
