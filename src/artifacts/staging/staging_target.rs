use std::path::PathBuf;

/// Marker argument selecting every file directly under the repository root
pub const ALL_FILES_MARKER: &str = ".";

/// What an `add` should stage, decided once from the raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagingTarget {
    /// Every regular file directly under the repository root
    AllFiles,
    /// The given paths, relative to the repository root; `.` among them
    /// stands for every file directly under the root
    ExplicitPaths(Vec<PathBuf>),
}

impl StagingTarget {
    /// No arguments, or the single argument `.`, selects all files
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args {
            [] => StagingTarget::AllFiles,
            [only] if only.as_ref() == ALL_FILES_MARKER => StagingTarget::AllFiles,
            paths => StagingTarget::ExplicitPaths(
                paths
                    .iter()
                    .map(|path| PathBuf::from(path.as_ref()))
                    .collect(),
            ),
        }
    }
}
