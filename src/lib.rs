//! # pom-tree
//!
//! Load the module tree of a multi-module Maven build and decide which modules
//! need to produce a build artifact.
//!
//! The tree is built by reading each module's `pom.xml` from the relative path
//! its parent declares, inheriting the version downward when a module omits
//! one. Every node can then be classified with
//! [`ProjectNode::is_buildable`](project::ProjectNode::is_buildable), usually
//! while walking the tree with [`ProjectNode::walk_mut`](project::ProjectNode::walk_mut).
//!
//! ```no_run
//! let mut root = pom_tree::build("path/to/project", "1.0.0")?;
//!
//! root.walk_mut(&mut |module| {
//!     if module.is_buildable() {
//!         println!("{}", module.relative_path.display());
//!     }
//! });
//! # Ok::<(), pom_tree::error::DescriptorLoadError>(())
//! ```

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fs;
pub mod logging;
pub mod output;
pub mod project;

pub use builder::{TreeBuilder, build};
pub use config::{BuildOptions, ReportOptions};
pub use error::{DecodeError, DescriptorLoadError};
pub use project::ProjectNode;
