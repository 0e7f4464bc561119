//! Decoding of a single Maven `pom.xml` into a flat [`Descriptor`] record.
//!
//! Only the handful of elements the module tree and the build classifier care
//! about are read. Every lookup is limited to direct children of the element in
//! question, so a `<version>` nested in `<dependencies>` never leaks into the
//! project's own version. Tags are matched by local name, which makes POMs with
//! and without the `http://maven.apache.org/POM/4.0.0` namespace decode alike.
//! Missing elements decode to empty strings, `None` or empty lists; no defaults
//! are applied here.

use std::path::{Component, Path};

use roxmltree::{Document, Node, ParsingOptions};
use serde::Serialize;

use crate::error::DecodeError;
use crate::project::{BuildInfo, ParentReference, Plugin, PluginConfiguration};

/// Default descriptor filename looked up in every module directory.
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// The decoded content of one descriptor, before it is placed in the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub model_version: String,
    pub parent: Option<ParentReference>,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub name: String,
    pub modules: Vec<String>,
    pub build: Option<BuildInfo>,
}

/// Turns raw descriptor bytes into a [`Descriptor`].
pub trait DescriptorDecoder {
    /// Decode one descriptor file.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the input is not UTF-8, not well-formed
    /// XML, or not rooted at `<project>`.
    fn decode(&self, bytes: &[u8]) -> Result<Descriptor, DecodeError>;
}

/// [`DescriptorDecoder`] for Maven POM files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PomDecoder;

impl DescriptorDecoder for PomDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Descriptor, DecodeError> {
        let text = std::str::from_utf8(bytes)?;
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(text, options)?;
        let root = doc.root_element();

        if !root.has_tag_name("project") {
            return Err(DecodeError::UnexpectedRoot {
                found: root.tag_name().name().to_string(),
            });
        }

        Ok(Descriptor {
            model_version: child_text(root, "modelVersion"),
            parent: child(root, "parent").map(parse_parent),
            group_id: child_text(root, "groupId"),
            artifact_id: child_text(root, "artifactId"),
            version: child_text(root, "version"),
            packaging: child_text(root, "packaging"),
            name: child_text(root, "name"),
            modules: parse_modules(root)?,
            build: child(root, "build").map(parse_build),
        })
    }
}

/// First direct child element with the given local name.
fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.has_tag_name(tag))
}

/// All direct text and CDATA content of `element`, joined and trimmed.
///
/// Comments and processing instructions between text runs are skipped.
fn element_text(element: Node<'_, '_>) -> String {
    element
        .children()
        .filter(Node::is_text)
        .filter_map(|t| t.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Text of the first direct child named `tag`, or an empty string.
fn child_text(node: Node<'_, '_>, tag: &str) -> String {
    child(node, tag).map(element_text).unwrap_or_default()
}

/// Every element named `item` under every direct `list` child of `node`.
fn list_items<'a, 'input>(
    node: Node<'a, 'input>,
    list: &'a str,
    item: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |c| c.is_element() && c.has_tag_name(list))
        .flat_map(move |l| {
            l.children()
                .filter(move |c| c.is_element() && c.has_tag_name(item))
        })
}

// A module entry that names the declaring directory itself (empty or only
// `.` segments) would make the tree infinitely deep.
fn parse_modules(project: Node<'_, '_>) -> Result<Vec<String>, DecodeError> {
    list_items(project, "modules", "module")
        .map(|m| {
            let entry = element_text(m);
            let names_self = Path::new(&entry)
                .components()
                .all(|c| matches!(c, Component::CurDir));
            if names_self {
                Err(DecodeError::SelfModule { entry })
            } else {
                Ok(entry)
            }
        })
        .collect()
}

fn parse_parent(parent: Node<'_, '_>) -> ParentReference {
    ParentReference {
        group_id: child_text(parent, "groupId"),
        artifact_id: child_text(parent, "artifactId"),
        version: child_text(parent, "version"),
        relative_path: child_text(parent, "relativePath"),
    }
}

fn parse_build(build: Node<'_, '_>) -> BuildInfo {
    BuildInfo {
        final_name: child_text(build, "finalName"),
        plugins: list_items(build, "plugins", "plugin")
            .map(parse_plugin)
            .collect(),
    }
}

fn parse_plugin(plugin: Node<'_, '_>) -> Plugin {
    Plugin {
        group_id: child_text(plugin, "groupId"),
        artifact_id: child_text(plugin, "artifactId"),
        configuration: child(plugin, "configuration").map(parse_configuration),
    }
}

// <configuration><mainClass> and <configuration><archive><manifest><mainClass>
// are read independently.
fn parse_configuration(configuration: Node<'_, '_>) -> PluginConfiguration {
    let archive_manifest_main_class = child(configuration, "archive")
        .and_then(|archive| child(archive, "manifest"))
        .map(|manifest| child_text(manifest, "mainClass"))
        .unwrap_or_default();

    PluginConfiguration {
        main_class: child_text(configuration, "mainClass"),
        archive_manifest_main_class,
    }
}
