//! Build-necessity classification.
//!
//! Packaging alone does not say whether a module produces something worth
//! building. An aggregator POM is interesting only when it actually aggregates,
//! a WAR only when it names its final artifact, and a plain JAR only when a
//! plugin makes it executable.

use super::{Plugin, ProjectNode};

/// Packaging assumed when `<packaging>` is absent.
pub const DEFAULT_PACKAGING: &str = "jar";

const SPRING_BOOT_GROUP_ID: &str = "org.springframework.boot";
const SPRING_BOOT_PLUGIN_ARTIFACT_ID: &str = "spring-boot-maven-plugin";

impl ProjectNode {
    /// Replace an empty packaging with [`DEFAULT_PACKAGING`].
    pub fn normalize_packaging(&mut self) {
        if self.packaging.is_empty() {
            DEFAULT_PACKAGING.clone_into(&mut self.packaging);
        }
    }

    /// Whether this module needs to produce a build artifact.
    ///
    /// Normalizes the packaging first, then returns `true` for:
    ///
    /// - `pom` packaging with at least one declared module
    /// - `war` packaging with a non-empty `<finalName>`
    /// - `jar` packaging with a plugin that declares a main class, or with the
    ///   Spring Boot Maven plugin
    pub fn is_buildable(&mut self) -> bool {
        self.normalize_packaging();

        match self.packaging.as_str() {
            "pom" => !self.modules.is_empty(),
            "war" => self
                .build
                .as_ref()
                .is_some_and(|build| !build.final_name.is_empty()),
            "jar" => self
                .build
                .as_ref()
                .is_some_and(|build| build.plugins.iter().any(Plugin::makes_executable)),
            _ => false,
        }
    }
}

impl Plugin {
    /// Whether this plugin turns a jar into a runnable artifact.
    #[must_use]
    pub fn makes_executable(&self) -> bool {
        self.declares_main_class() || self.is_spring_boot_plugin()
    }

    fn declares_main_class(&self) -> bool {
        self.configuration.as_ref().is_some_and(|configuration| {
            !configuration.main_class.is_empty()
                || !configuration.archive_manifest_main_class.is_empty()
        })
    }

    fn is_spring_boot_plugin(&self) -> bool {
        self.group_id == SPRING_BOOT_GROUP_ID && self.artifact_id == SPRING_BOOT_PLUGIN_ARTIFACT_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{BuildInfo, PluginConfiguration};

    fn node(packaging: &str, modules: &[&str], build: Option<BuildInfo>) -> ProjectNode {
        ProjectNode {
            packaging: packaging.to_string(),
            modules: modules.iter().map(ToString::to_string).collect(),
            build,
            ..ProjectNode::default()
        }
    }

    fn build_with_plugins(plugins: Vec<Plugin>) -> Option<BuildInfo> {
        Some(BuildInfo {
            final_name: String::new(),
            plugins,
        })
    }

    fn plugin(group_id: &str, artifact_id: &str, main_class: &str, manifest: &str) -> Plugin {
        Plugin {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            configuration: Some(PluginConfiguration {
                main_class: main_class.to_string(),
                archive_manifest_main_class: manifest.to_string(),
            }),
        }
    }

    #[test]
    fn test_pom_with_modules_is_buildable() {
        assert!(node("pom", &["a", "b"], None).is_buildable());
    }

    #[test]
    fn test_pom_without_modules_is_not_buildable() {
        assert!(!node("pom", &[], None).is_buildable());
    }

    #[test]
    fn test_war_with_final_name_is_buildable() {
        let build = Some(BuildInfo {
            final_name: "app".to_string(),
            plugins: Vec::new(),
        });
        assert!(node("war", &[], build).is_buildable());
    }

    #[test]
    fn test_war_without_build_is_not_buildable() {
        assert!(!node("war", &[], None).is_buildable());
    }

    #[test]
    fn test_war_with_empty_final_name_is_not_buildable() {
        let build = Some(BuildInfo::default());
        assert!(!node("war", &[], build).is_buildable());
    }

    #[test]
    fn test_jar_with_main_class_is_buildable() {
        let build = build_with_plugins(vec![plugin("", "exec-maven-plugin", "Main", "")]);
        assert!(node("jar", &[], build).is_buildable());
    }

    #[test]
    fn test_jar_with_manifest_main_class_is_buildable() {
        let build = build_with_plugins(vec![plugin(
            "org.apache.maven.plugins",
            "maven-jar-plugin",
            "",
            "com.example.Main",
        )]);
        assert!(node("jar", &[], build).is_buildable());
    }

    #[test]
    fn test_jar_with_spring_boot_plugin_is_buildable() {
        let build = build_with_plugins(vec![Plugin {
            group_id: "org.springframework.boot".to_string(),
            artifact_id: "spring-boot-maven-plugin".to_string(),
            configuration: None,
        }]);
        assert!(node("jar", &[], build).is_buildable());
    }

    #[test]
    fn test_jar_with_other_plugins_is_not_buildable() {
        let build = build_with_plugins(vec![
            plugin("org.apache.maven.plugins", "maven-compiler-plugin", "", ""),
            Plugin {
                group_id: "org.springframework.boot".to_string(),
                artifact_id: "spring-boot-starter".to_string(),
                configuration: None,
            },
        ]);
        assert!(!node("jar", &[], build).is_buildable());
    }

    #[test]
    fn test_any_plugin_is_enough() {
        let build = build_with_plugins(vec![
            plugin("org.apache.maven.plugins", "maven-compiler-plugin", "", ""),
            plugin("", "exec-maven-plugin", "com.example.Cli", ""),
        ]);
        assert!(node("jar", &[], build).is_buildable());
    }

    #[test]
    fn test_jar_without_plugins_is_not_buildable() {
        assert!(!node("jar", &[], build_with_plugins(Vec::new())).is_buildable());
        assert!(!node("jar", &[], None).is_buildable());
    }

    #[test]
    fn test_empty_packaging_is_normalized_to_jar() {
        let mut project = node("", &[], None);

        assert!(!project.is_buildable());
        assert_eq!(project.packaging, "jar");
    }

    #[test]
    fn test_empty_packaging_follows_jar_rules() {
        let mut project = node("", &[], build_with_plugins(vec![plugin("", "x", "Main", "")]));

        assert!(project.is_buildable());
        assert_eq!(project.packaging, "jar");
    }

    #[test]
    fn test_normalize_keeps_declared_packaging() {
        let mut project = node("war", &[], None);
        project.normalize_packaging();
        assert_eq!(project.packaging, "war");
    }

    #[test]
    fn test_unknown_packaging_is_not_buildable() {
        let build = Some(BuildInfo {
            final_name: "bundle".to_string(),
            plugins: vec![plugin("", "x", "Main", "")],
        });
        assert!(!node("ear", &["a"], build).is_buildable());
    }

    #[test]
    fn test_jar_with_modules_ignores_aggregator_rule() {
        assert!(!node("jar", &["a"], None).is_buildable());
    }
}
