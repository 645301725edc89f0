//! Individual validation passes over a parsed descriptor.
//!
//! Each pass returns its findings instead of failing, so the orchestrator can
//! keep going and report every problem in one run.

use std::collections::HashSet;
use std::path::Path;

use super::manifest::PluginManifest;
use super::marketplace::PluginDeclaration;
use super::report::{SkippedReference, ValidationIssue};
use crate::common::FileSystem;
use crate::common::path::{plugin_base_dir, resolve_reference};

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "version", "description"];

/// References under this prefix point at external submodules and are never
/// checked for existence.
pub const EXTERNAL_DATA_PREFIX: &str = "data/";

pub fn validate_fields(plugin: &PluginManifest, file: &Path) -> Vec<ValidationIssue> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|field| plugin.required(field).is_none())
        .map(|field| ValidationIssue::MissingField {
            file: file.to_path_buf(),
            field,
        })
        .collect()
}

/// Checks that every referenced file exists relative to the plugin root.
///
/// `data/` references are skipped and, when `skipped` is given, recorded.
pub fn validate_references(
    plugin: &PluginManifest,
    file: &Path,
    fs: &dyn FileSystem,
    mut skipped: Option<&mut Vec<SkippedReference>>,
) -> Vec<ValidationIssue> {
    let base = plugin_base_dir(file);
    let mut errors = Vec::new();

    for reference in plugin.references() {
        if reference.starts_with(EXTERNAL_DATA_PREFIX) {
            tracing::debug!(file = %file.display(), reference, "Skipping external data reference");
            if let Some(skipped) = skipped.as_deref_mut() {
                skipped.push(SkippedReference {
                    file: file.to_path_buf(),
                    reference: reference.to_string(),
                });
            }
            continue;
        }

        if !fs.exists(&resolve_reference(base, reference)) {
            errors.push(ValidationIssue::MissingReference {
                file: file.to_path_buf(),
                reference: reference.to_string(),
            });
        }
    }

    errors
}

/// `Some` when `name` was already seen. The caller must not re-add it.
pub fn check_duplicate(
    name: &str,
    found: &HashSet<String>,
    file: &Path,
) -> Option<ValidationIssue> {
    found.contains(name).then(|| ValidationIssue::DuplicateName {
        file: file.to_path_buf(),
        name: name.to_string(),
    })
}

pub fn check_declaration(
    name: &str,
    declared: &HashSet<Option<&str>>,
    file: &Path,
) -> Option<ValidationIssue> {
    (!declared.contains(&Some(name))).then(|| ValidationIssue::Undeclared {
        file: file.to_path_buf(),
        name: name.to_string(),
    })
}

/// Manifest entries whose name never showed up in a parsed descriptor.
pub fn validate_marketplace_refs(
    plugins: &[PluginDeclaration],
    found: &HashSet<String>,
) -> Vec<ValidationIssue> {
    plugins
        .iter()
        .filter(|p| p.name.as_deref().is_none_or(|name| !found.contains(name)))
        .map(|p| ValidationIssue::UnknownPlugin {
            name: p.reference_label(),
        })
        .collect()
}
