use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use super::checks::{
    check_declaration, check_duplicate, validate_fields, validate_marketplace_refs,
    validate_references,
};
use super::manifest::PluginManifest;
use super::marketplace::Marketplace;
use super::report::{ValidationIssue, ValidationReport};
use crate::common::{FileSystem, LocalFs};
use crate::config::ValidatorConfig;

/// Cross-checks the marketplace manifest against every plugin descriptor it
/// points to.
///
/// Runs are linear and deterministic: findings are reported per descriptor
/// in manifest order (fields, then duplicate/declaration, then references),
/// followed by manifest entries that never matched a descriptor.
pub struct PluginValidator {
    config: ValidatorConfig,
    fs: Arc<dyn FileSystem>,
}

impl PluginValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            fs: Arc::new(LocalFs),
        }
    }

    pub fn with_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn validate(&self) -> ValidationReport {
        let span = tracing::info_span!(
            "validate_plugins",
            marketplace = %self.config.marketplace_path.display()
        );
        let _guard = span.enter();

        let fs = self.fs.as_ref();
        let marketplace = match Marketplace::load(&self.config.marketplace_path, fs) {
            Ok(marketplace) => marketplace,
            Err(e) => {
                tracing::debug!(error = %e, "Marketplace failed to load");
                return ValidationReport::fatal(e);
            }
        };

        let declared: HashSet<Option<&str>> = marketplace
            .plugins
            .iter()
            .map(|p| p.name.as_deref())
            .collect();

        let mut report = ValidationReport::default();
        let descriptor_files = self.descriptor_files(&marketplace, &mut report.errors);
        let mut found: HashSet<String> = HashSet::new();

        for file in &descriptor_files {
            tracing::debug!(file = %file.display(), "Validating plugin descriptor");

            let plugin = match PluginManifest::load(file, fs) {
                Ok(plugin) => plugin,
                Err(e) => {
                    report.errors.push(e.into());
                    continue;
                }
            };

            report.errors.extend(validate_fields(&plugin, file));

            if let Some(name) = plugin.name.as_deref() {
                match check_duplicate(name, &found, file) {
                    Some(issue) => report.errors.push(issue),
                    None => {
                        found.insert(name.to_string());
                    }
                }

                report.errors.extend(check_declaration(name, &declared, file));
            }

            let skipped = self.config.verbose.then_some(&mut report.skipped_refs);
            report
                .errors
                .extend(validate_references(&plugin, file, fs, skipped));
        }

        report
            .errors
            .extend(validate_marketplace_refs(&marketplace.plugins, &found));
        report.plugin_count = descriptor_files.len();

        tracing::info!(
            plugins = report.plugin_count,
            errors = report.error_count(),
            "Plugin validation finished"
        );
        report
    }

    /// Expected descriptor paths in manifest order. Entries without a
    /// `source` are reported and left out.
    fn descriptor_files(
        &self,
        marketplace: &Marketplace,
        errors: &mut Vec<ValidationIssue>,
    ) -> Vec<PathBuf> {
        let mut files = Vec::with_capacity(marketplace.plugin_count());
        for plugin in &marketplace.plugins {
            match plugin.descriptor_path(&self.config.root_dir) {
                Some(path) => files.push(path),
                None => errors.push(ValidationIssue::MissingSource {
                    name: plugin.display_name().to_string(),
                }),
            }
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::InMemoryFs;

    const MARKETPLACE: &str = ".claude-plugin/marketplace.json";

    fn validator(fs: InMemoryFs) -> PluginValidator {
        PluginValidator::new(ValidatorConfig::default()).with_fs(Arc::new(fs))
    }

    #[test]
    fn test_valid_setup() {
        let fs = InMemoryFs::new()
            .with_file(
                MARKETPLACE,
                r#"{"plugins":[{"name":"test-plugin","source":"./test-plugin"}]}"#,
            )
            .with_file(
                "./test-plugin/.claude-plugin/plugin.json",
                r#"{"name":"test-plugin","version":"1.0.0","description":"Test"}"#,
            );

        let report = validator(fs).validate();
        assert!(report.is_ok(), "{:?}", report.messages());
        assert_eq!(report.plugin_count, 1);
    }

    #[test]
    fn test_marketplace_fails_to_load() {
        let report = validator(InMemoryFs::new()).validate();
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.plugin_count, 0);
        assert!(report.messages()[0].contains("Failed to read marketplace.json"));
    }

    #[test]
    fn test_errors_from_multiple_plugins() {
        let fs = InMemoryFs::new()
            .with_file(
                MARKETPLACE,
                r#"{"plugins":[
                    {"name":"plugin1","source":"./plugin1"},
                    {"name":"plugin2","source":"./plugin2"}
                ]}"#,
            )
            .with_file("plugin1/.claude-plugin/plugin.json", "{}")
            .with_file("plugin2/.claude-plugin/plugin.json", "{}");

        let report = validator(fs).validate();
        assert_eq!(
            report.messages(),
            vec![
                "./plugin1/.claude-plugin/plugin.json: missing 'name'",
                "./plugin1/.claude-plugin/plugin.json: missing 'version'",
                "./plugin1/.claude-plugin/plugin.json: missing 'description'",
                "./plugin2/.claude-plugin/plugin.json: missing 'name'",
                "./plugin2/.claude-plugin/plugin.json: missing 'version'",
                "./plugin2/.claude-plugin/plugin.json: missing 'description'",
                "marketplace.json: references non-existent plugin 'plugin1'",
                "marketplace.json: references non-existent plugin 'plugin2'",
            ]
        );
        assert_eq!(report.plugin_count, 2);
    }

    #[test]
    fn test_empty_marketplace() {
        let fs = InMemoryFs::new().with_file(MARKETPLACE, r#"{"plugins":[]}"#);
        let report = validator(fs).validate();
        assert!(report.is_ok());
        assert_eq!(report.plugin_count, 0);
    }

    #[test]
    fn test_missing_source_is_not_processed() {
        let fs = InMemoryFs::new().with_file(MARKETPLACE, r#"{"plugins":[{"name":"p"},{}]}"#);

        let report = validator(fs).validate();
        assert_eq!(
            report.messages(),
            vec![
                "marketplace.json: plugin 'p' missing 'source' field",
                "marketplace.json: plugin '(unnamed)' missing 'source' field",
                "marketplace.json: references non-existent plugin 'p'",
                "marketplace.json: references non-existent plugin 'undefined'",
            ]
        );
        assert_eq!(report.plugin_count, 0);
    }

    #[test]
    fn test_skipped_refs_only_when_verbose() {
        let fs = Arc::new(
            InMemoryFs::new()
                .with_file(MARKETPLACE, r#"{"plugins":[{"name":"p","source":"./p"}]}"#)
                .with_file(
                    "p/.claude-plugin/plugin.json",
                    r#"{"name":"p","version":"1","description":"d","skills":["data/x/SKILL.md"]}"#,
                ),
        );

        let quiet = PluginValidator::new(ValidatorConfig::default())
            .with_fs(fs.clone())
            .validate();
        assert!(quiet.is_ok());
        assert!(quiet.skipped_refs.is_empty());

        let verbose = PluginValidator::new(ValidatorConfig::default().verbose(true))
            .with_fs(fs)
            .validate();
        assert!(verbose.is_ok());
        assert_eq!(verbose.skipped_refs.len(), 1);
        assert_eq!(verbose.skipped_refs[0].reference, "data/x/SKILL.md");
    }

    #[test]
    fn test_root_dir_prefixes_sources() {
        let fs = InMemoryFs::new()
            .with_file(
                "repo/.claude-plugin/marketplace.json",
                r#"{"plugins":[{"name":"p","source":"./p"}]}"#,
            )
            .with_file(
                "repo/p/.claude-plugin/plugin.json",
                r#"{"name":"p","version":"1","description":"d"}"#,
            );

        let config = ValidatorConfig::default()
            .with_root_dir("repo")
            .with_marketplace_path("repo/.claude-plugin/marketplace.json");
        let report = PluginValidator::new(config)
            .with_fs(Arc::new(fs))
            .validate();
        assert!(report.is_ok(), "{:?}", report.messages());
    }

    #[test]
    fn test_falsy_manifest_names() {
        let fs = InMemoryFs::new().with_file(
            MARKETPLACE,
            r#"{"plugins":[{"name":false},{"name":null,"source":"./gone"}]}"#,
        );

        let report = validator(fs).validate();
        assert_eq!(
            report.messages(),
            vec![
                "marketplace.json: plugin '(unnamed)' missing 'source' field",
                "./gone/.claude-plugin/plugin.json: failed to read file - \
                 no such file or directory: ./gone/.claude-plugin/plugin.json",
                "marketplace.json: references non-existent plugin 'false'",
                "marketplace.json: references non-existent plugin 'null'",
            ]
        );
    }

    #[test]
    fn test_trailing_slash_source_kept_in_messages() {
        let fs = InMemoryFs::new()
            .with_file(MARKETPLACE, r#"{"plugins":[{"name":"p","source":"./p/"}]}"#)
            .with_file("p/.claude-plugin/plugin.json", r#"{"name":"p","version":"1"}"#);

        let report = validator(fs).validate();
        assert_eq!(
            report.messages(),
            vec!["./p//.claude-plugin/plugin.json: missing 'description'"]
        );
    }
}
