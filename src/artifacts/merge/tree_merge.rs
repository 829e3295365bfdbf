use crate::artifacts::objects::Tree;
use std::collections::BTreeSet;

/// Result of comparing a source tree against a target tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeMerge {
    /// Every non-conflicting path with the object ID it resolved to
    pub merged: Tree,
    /// Paths present on both sides with different object IDs, sorted
    pub conflicts: Vec<String>,
}

impl TreeMerge {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Merge `source` into `target`
///
/// For every path in either tree: identical IDs on both sides are kept,
/// different IDs become a conflict and are left out of the merged tree, and
/// a path present on one side only is taken from that side.
pub fn merge_trees(source: &Tree, target: &Tree) -> TreeMerge {
    let paths = source.keys().chain(target.keys()).collect::<BTreeSet<_>>();

    paths
        .into_iter()
        .fold(TreeMerge::default(), |mut result, path| {
            match (source.get(path), target.get(path)) {
                (Some(source_oid), Some(target_oid)) if source_oid != target_oid => {
                    result.conflicts.push(path.clone());
                }
                (Some(oid), _) | (None, Some(oid)) => {
                    result.merged.insert(path.clone(), oid.clone());
                }
                (None, None) => {}
            }
            result
        })
}
