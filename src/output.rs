//! Reports over a classified module tree.
//!
//! A [`Report`] is a flat, pre-order snapshot of the tree with every module
//! already classified. It renders either as an indented, coloured tree for
//! humans or, with `--json`, as a single JSON document for scripting.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::project::ProjectNode;

/// Top-level report, serialized as-is in JSON mode.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Root module directory
    pub root: String,

    /// Every module in walk order
    pub modules: Vec<ModuleEntry>,

    /// Aggregated counts
    pub summary: Summary,
}

/// One module in the report.
#[derive(Debug, Serialize)]
pub struct ModuleEntry {
    pub path: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub name: String,

    /// Distance from the root module (0 for the root)
    pub depth: usize,

    /// Whether the module needs to produce a build artifact
    pub buildable: bool,

    #[serde(skip)]
    coordinates: String,
}

/// Module counts.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub buildable: usize,
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl ModuleEntry {
    fn new(node: &ProjectNode, depth: usize) -> Self {
        Self {
            path: path_string(&node.relative_path),
            group_id: node.group_id.clone(),
            artifact_id: node.artifact_id.clone(),
            version: node.version.clone(),
            packaging: node.packaging.clone(),
            name: node.name.clone(),
            depth,
            buildable: false,
            coordinates: node.coordinates(),
        }
    }
}

impl Report {
    /// Classify every module of `tree` and snapshot the result.
    ///
    /// Classification normalizes empty packagings, so the tree is borrowed
    /// mutably.
    pub fn from_tree(tree: &mut ProjectNode) -> Self {
        let mut buildable = Vec::new();
        tree.walk_mut(&mut |node| buildable.push(node.is_buildable()));

        let mut modules = Vec::new();
        tree.walk_with_depth(&mut |node, depth| modules.push(ModuleEntry::new(node, depth)));

        for (entry, is_buildable) in modules.iter_mut().zip(buildable) {
            entry.buildable = is_buildable;
        }

        let summary = Summary {
            total: modules.len(),
            buildable: modules.iter().filter(|m| m.buildable).count(),
        };

        Self {
            root: path_string(&tree.relative_path),
            modules,
            summary,
        }
    }

    /// Modules to show, honouring `buildable_only`.
    pub fn visible_modules(&self, buildable_only: bool) -> impl Iterator<Item = &ModuleEntry> {
        self.modules
            .iter()
            .filter(move |m| !buildable_only || m.buildable)
    }

    /// Render as an indented tree followed by a one-line summary.
    ///
    /// # Examples
    ///
    /// ```text
    /// ✔ com.example:shop:1.0 [pom] (shop)
    ///   ✔ com.example:api:1.0 [jar] (shop/api)
    ///   · com.example:model:1.0 [jar] (shop/model)
    ///
    /// 2 of 3 modules need a build artifact
    /// ```
    #[must_use]
    pub fn render_text(&self, buildable_only: bool) -> String {
        let mut lines: Vec<String> = self
            .visible_modules(buildable_only)
            .map(|module| {
                let indent = "  ".repeat(module.depth);
                let marker = if module.buildable {
                    "✔".green()
                } else {
                    "·".dimmed()
                };
                format!(
                    "{indent}{marker} {} [{}] ({})",
                    module.coordinates.bold(),
                    module.packaging.cyan(),
                    module.path.dimmed()
                )
            })
            .collect();

        lines.push(String::new());
        lines.push(format!(
            "{} of {} modules need a build artifact",
            self.summary.buildable.to_string().green().bold(),
            self.summary.total
        ));

        lines.join("\n")
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
