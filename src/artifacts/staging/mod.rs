//! Staging request types
//!
//! - `staging_target`: which working-tree files an `add` should stage

pub mod staging_target;
