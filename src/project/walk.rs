//! Pre-order traversal of the module tree.
//!
//! Every walk visits a module before any of its descendants and visits
//! children left to right in declaration order. Child order is fixed when the
//! tree is built, so walking the same tree twice visits the same sequence.

use std::path::PathBuf;

use super::ProjectNode;

impl ProjectNode {
    /// Apply `visit` to this module and then to every descendant.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&Self),
    {
        self.walk_with_depth(&mut |node, _| visit(node));
    }

    /// Like [`walk`](Self::walk), also passing the depth (0 for `self`).
    pub fn walk_with_depth<F>(&self, visit: &mut F)
    where
        F: FnMut(&Self, usize),
    {
        self.walk_from(0, visit);
    }

    fn walk_from<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(&Self, usize),
    {
        visit(self, depth);
        for child in &self.children {
            child.walk_from(depth + 1, visit);
        }
    }

    /// Mutable counterpart of [`walk`](Self::walk).
    pub fn walk_mut<F>(&mut self, visit: &mut F)
    where
        F: FnMut(&mut Self),
    {
        visit(self);
        for child in &mut self.children {
            child.walk_mut(visit);
        }
    }

    /// Number of modules in this subtree, including `self`.
    #[must_use]
    pub fn module_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    /// Classify every module and return the paths of the buildable ones, in
    /// walk order.
    pub fn buildable_modules(&mut self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        self.walk_mut(&mut |node| {
            if node.is_buildable() {
                paths.push(node.relative_path.clone());
            }
        });
        paths
    }
}
