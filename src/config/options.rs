//! Resolved options for building and reporting a module tree.
//!
//! These are the values left after CLI arguments and the configuration file
//! have been merged; the rest of the crate never looks at either source
//! directly.

use std::path::PathBuf;

use crate::descriptor::DESCRIPTOR_FILE;

/// What to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Root module directory
    pub root: PathBuf,

    /// Version handed to the root module when it declares none
    pub default_version: String,

    /// Descriptor filename looked up in every module directory
    pub descriptor: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            default_version: String::new(),
            descriptor: DESCRIPTOR_FILE.to_string(),
        }
    }
}

/// How to present the classified tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Only list modules that need a build artifact
    pub buildable_only: bool,

    /// Emit a JSON document instead of the coloured tree
    pub json: bool,
}
