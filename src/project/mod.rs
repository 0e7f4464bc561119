//! The module tree and the operations performed on it.
//!
//! ## Main Parts
//!
//! - [`ProjectNode`] - One module: its decoded descriptor, location and children
//! - [`BuildInfo`], [`Plugin`], [`PluginConfiguration`] - The `<build>` section
//! - [`ParentReference`] - The informational `<parent>` section
//! - Classification (`ProjectNode::is_buildable`) and traversal
//!   (`ProjectNode::walk`) are implemented in their own submodules

pub mod classify;
#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for the node data model
pub mod project;
pub mod walk;

pub use classify::DEFAULT_PACKAGING;
pub use project::{BuildInfo, ParentReference, Plugin, PluginConfiguration, ProjectNode};
