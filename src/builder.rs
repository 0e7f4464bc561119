//! Recursive construction of the module tree.
//!
//! Starting from a root module directory, the builder decodes that module's
//! descriptor, fills in a missing version from the enclosing module, and then
//! loads every declared sub-module beneath it in declaration order. Loading is
//! strictly sequential and fail-fast: the first descriptor that cannot be read
//! or decoded aborts the whole build and no partial tree is returned.

use std::path::Path;

use tracing::{debug, trace};

use crate::{
    descriptor::{DESCRIPTOR_FILE, DescriptorDecoder, PomDecoder},
    error::DescriptorLoadError,
    fs::{FileSystem, RealFileSystem},
    project::ProjectNode,
};

/// Builds a [`ProjectNode`] tree from descriptor files.
pub struct TreeBuilder<'a> {
    /// Where descriptor bytes come from
    fs: &'a dyn FileSystem,

    /// How descriptor bytes are decoded
    decoder: &'a dyn DescriptorDecoder,

    /// Descriptor filename looked up in every module directory
    descriptor_file: String,
}

impl std::fmt::Debug for TreeBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeBuilder")
            .field("descriptor_file", &self.descriptor_file)
            .finish_non_exhaustive()
    }
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder that reads `pom.xml` files through `fs`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, decoder: &'a dyn DescriptorDecoder) -> Self {
        Self {
            fs,
            decoder,
            descriptor_file: DESCRIPTOR_FILE.to_string(),
        }
    }

    /// Use a different descriptor filename than `pom.xml`.
    #[must_use]
    pub fn with_descriptor_file(mut self, descriptor_file: impl Into<String>) -> Self {
        self.descriptor_file = descriptor_file.into();
        self
    }

    /// Load the module at `relative_path` and all of its sub-modules.
    ///
    /// A module without a `<version>` takes `inherited_version`; its own
    /// sub-modules then inherit whatever version it ends up with.
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptorLoadError`] naming the first module directory
    /// whose descriptor could not be read or decoded.
    pub fn build(
        &self,
        relative_path: impl AsRef<Path>,
        inherited_version: &str,
    ) -> Result<ProjectNode, DescriptorLoadError> {
        let relative_path = relative_path.as_ref();
        let mut node = self.load(relative_path)?;

        if node.version.is_empty() {
            trace!(
                path = %relative_path.display(),
                version = inherited_version,
                "inheriting version"
            );
            inherited_version.clone_into(&mut node.version);
        }

        for module in &node.modules.clone() {
            let child = self.build(relative_path.join(module), &node.version)?;
            node.add_child(child);
        }

        Ok(node)
    }

    /// Read and decode the descriptor of a single module.
    fn load(&self, relative_path: &Path) -> Result<ProjectNode, DescriptorLoadError> {
        let descriptor_path = relative_path.join(&self.descriptor_file);
        debug!(path = %descriptor_path.display(), "loading descriptor");

        let bytes = self
            .fs
            .read(&descriptor_path)
            .map_err(|source| DescriptorLoadError::Read {
                path: relative_path.to_path_buf(),
                source,
            })?;

        let descriptor =
            self.decoder
                .decode(&bytes)
                .map_err(|source| DescriptorLoadError::Decode {
                    path: relative_path.to_path_buf(),
                    source,
                })?;

        Ok(ProjectNode::new(descriptor, relative_path.to_path_buf()))
    }
}

/// Build the tree rooted at `relative_path` from `pom.xml` files on disk.
///
/// # Errors
///
/// Returns a [`DescriptorLoadError`] naming the first module directory whose
/// descriptor could not be read or decoded.
pub fn build(
    relative_path: impl AsRef<Path>,
    inherited_version: &str,
) -> Result<ProjectNode, DescriptorLoadError> {
    TreeBuilder::new(&RealFileSystem, &PomDecoder).build(relative_path, inherited_version)
}
