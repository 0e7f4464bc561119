//! Core module data structures.
//!
//! A [`ProjectNode`] is one module of a multi-module build: the decoded fields of
//! its descriptor, the directory it was loaded from, and the child modules it
//! owns. The tree is built once by the [`TreeBuilder`](crate::builder::TreeBuilder)
//! and never shares nodes.

use std::{
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

use serde::Serialize;

use crate::descriptor::Descriptor;

/// Reference to a parent descriptor as written in `<parent>`.
///
/// It is informational only and is never resolved against the loaded tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParentReference {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub relative_path: String,
}

/// The `<build>` section of a descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    /// `<finalName>`, empty when absent
    pub final_name: String,

    /// `<plugins>` in declaration order
    pub plugins: Vec<Plugin>,
}

/// One declared build plugin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Plugin {
    pub group_id: String,
    pub artifact_id: String,
    pub configuration: Option<PluginConfiguration>,
}

/// The parts of a plugin `<configuration>` that can name a main class.
///
/// A main class may be declared either directly (`<mainClass>`) or through the
/// archiver (`<archive><manifest><mainClass>`). Both are kept as they were
/// written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PluginConfiguration {
    pub main_class: String,
    pub archive_manifest_main_class: String,
}

/// One module of the project tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProjectNode {
    pub model_version: String,

    /// `<parent>` as declared; not linked to any loaded node
    pub parent: Option<ParentReference>,

    pub group_id: String,
    pub artifact_id: String,

    /// Declared version, or the one inherited from the enclosing module
    pub version: String,

    /// Raw `<packaging>`; empty until [`normalize_packaging`](Self::normalize_packaging) runs
    pub packaging: String,

    pub name: String,

    /// Sub-module paths exactly as declared under `<modules>`
    pub modules: Vec<String>,

    pub build: Option<BuildInfo>,

    /// Directory this module's descriptor was loaded from
    pub relative_path: PathBuf,

    /// Loaded sub-modules, in the same order as [`modules`](Self::modules)
    pub children: Vec<Self>,
}

impl ProjectNode {
    /// Place a decoded descriptor at `relative_path`, with no children yet.
    #[must_use]
    pub fn new(descriptor: Descriptor, relative_path: PathBuf) -> Self {
        let Descriptor {
            model_version,
            parent,
            group_id,
            artifact_id,
            version,
            packaging,
            name,
            modules,
            build,
        } = descriptor;

        Self {
            model_version,
            parent,
            group_id,
            artifact_id,
            version,
            packaging,
            name,
            modules,
            build,
            relative_path,
            children: Vec::new(),
        }
    }

    /// Append a loaded sub-module.
    pub fn add_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// `groupId:artifactId:version` coordinates, skipping empty parts.
    #[must_use]
    pub fn coordinates(&self) -> String {
        [
            self.group_id.as_str(),
            self.artifact_id.as_str(),
            self.version.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(":")
    }
}

impl Display for ProjectNode {
    /// Format as `coordinates [packaging] (path)`.
    ///
    /// # Examples
    ///
    /// - `com.example:api:1.0 [jar] (shop/api)`
    /// - `com.example:shop:1.0 (shop)` (when packaging was never declared)
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.coordinates())?;
        if !self.packaging.is_empty() {
            write!(f, " [{}]", self.packaging)?;
        }
        write!(f, " ({})", self.relative_path.display())
    }
}
