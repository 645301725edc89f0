use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use super::PluginError;
use super::manifest::{PLUGIN_CONFIG_DIR, PLUGIN_MANIFEST_FILE};
use super::report::UNDEFINED_NAME;
use crate::common::FileSystem;
use crate::common::json::{attr, is_truthy, label, truthy_label};

/// Placeholder used when a manifest entry has no name.
pub const UNNAMED: &str = "(unnamed)";

/// The central marketplace manifest.
#[derive(Debug, Clone)]
pub struct Marketplace {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub plugins: Vec<PluginDeclaration>,
}

/// One entry of the marketplace `plugins` array.
///
/// Entries are read leniently: a wrong-typed attribute reads as text or as
/// absent rather than failing the whole manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct PluginDeclaration {
    pub name: Option<String>,
    pub source: Option<String>,
    pub version: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    raw_name: Option<Value>,
}

impl From<Value> for PluginDeclaration {
    fn from(value: Value) -> Self {
        let text = |key: &str| attr(&value, key).and_then(label);
        Self {
            name: text("name"),
            source: attr(&value, "source").and_then(truthy_label),
            version: text("version"),
            category: text("category"),
            description: text("description"),
            keywords: attr(&value, "keywords")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(label).collect()),
            raw_name: attr(&value, "name").cloned(),
        }
    }
}

impl PluginDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            raw_name: Some(Value::String(name.clone())),
            name: Some(name),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Name for messages, falling back to [`UNNAMED`] for falsy names.
    pub fn display_name(&self) -> &str {
        match (&self.raw_name, self.name.as_deref()) {
            (Some(raw), Some(name)) if is_truthy(raw) => name,
            _ => UNNAMED,
        }
    }

    /// Name as written in dangling-reference messages: `undefined` when the
    /// attribute is absent, `null` when it is explicitly null.
    pub fn reference_label(&self) -> String {
        match &self.raw_name {
            None => UNDEFINED_NAME.to_string(),
            Some(Value::Null) => "null".to_string(),
            Some(raw) => label(raw).unwrap_or_default(),
        }
    }

    /// `<root>/<source>/.claude-plugin/plugin.json`, if a source is declared.
    ///
    /// `source` is kept verbatim, so a trailing slash shows up as `//` in
    /// messages.
    pub fn descriptor_path(&self, root: &Path) -> Option<PathBuf> {
        self.source.as_ref().map(|source| {
            let relative = format!("{source}/{PLUGIN_CONFIG_DIR}/{PLUGIN_MANIFEST_FILE}");
            if root.as_os_str().is_empty() {
                PathBuf::from(relative)
            } else {
                root.join(relative)
            }
        })
    }
}

impl Marketplace {
    /// Reads and shape-checks the manifest. Any failure here is fatal for a run.
    pub fn load(path: &Path, fs: &dyn FileSystem) -> Result<Self, PluginError> {
        let content = fs.read_to_string(path).map_err(PluginError::MarketplaceRead)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, PluginError> {
        let value: Value = serde_json::from_str(content).map_err(PluginError::MarketplaceJson)?;

        let plugins = attr(&value, "plugins")
            .and_then(Value::as_array)
            .ok_or(PluginError::MissingPluginsArray)?;

        Ok(Self {
            name: attr(&value, "name").and_then(label),
            version: attr(&value, "version").and_then(label),
            description: attr(&value, "description").and_then(label),
            plugins: plugins.iter().cloned().map(PluginDeclaration::from).collect(),
        })
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::InMemoryFs;

    #[test]
    fn test_load_valid_marketplace() {
        let fs = InMemoryFs::new().with_file(
            "test.json",
            r#"{"name":"claudius","version":"1.0.0","plugins":[{"name":"test-plugin"}]}"#,
        );

        let marketplace = Marketplace::load(Path::new("test.json"), &fs).unwrap();
        assert_eq!(marketplace.plugin_count(), 1);
        assert_eq!(marketplace.name.as_deref(), Some("claudius"));
        assert_eq!(marketplace.plugins[0].name.as_deref(), Some("test-plugin"));
        assert!(marketplace.description.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Marketplace::load(Path::new("missing.json"), &InMemoryFs::new()).unwrap_err();
        assert!(matches!(err, PluginError::MarketplaceRead(_)));
        assert!(err.to_string().contains("Failed to read marketplace.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let fs = InMemoryFs::new().with_file("invalid.json", "not valid json");
        let err = Marketplace::load(Path::new("invalid.json"), &fs).unwrap_err();
        assert!(matches!(err, PluginError::MarketplaceJson(_)));
        assert!(err.to_string().contains("Failed to read marketplace.json"));
    }

    #[test]
    fn test_missing_plugins_array() {
        let err = Marketplace::parse(r#"{"name":"test"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"marketplace.json must contain a "plugins" array"#
        );
    }

    #[test]
    fn test_non_array_plugins() {
        let err = Marketplace::parse(r#"{"plugins":"not-array"}"#).unwrap_err();
        assert!(matches!(err, PluginError::MissingPluginsArray));

        let err = Marketplace::parse("[]").unwrap_err();
        assert!(matches!(err, PluginError::MissingPluginsArray));
    }

    #[test]
    fn test_lenient_declarations() {
        let marketplace = Marketplace::parse(
            r#"{"plugins":[
                {"name":"full","source":"./full","version":"1.0.0","category":"dev",
                 "description":"Full","keywords":["a","b"]},
                {"name":7,"source":""},
                "not-an-object"
            ]}"#,
        )
        .unwrap();

        let full = &marketplace.plugins[0];
        assert_eq!(full.source.as_deref(), Some("./full"));
        assert_eq!(full.category.as_deref(), Some("dev"));
        assert_eq!(full.keywords, Some(vec!["a".to_string(), "b".to_string()]));

        let numeric = &marketplace.plugins[1];
        assert_eq!(numeric.name.as_deref(), Some("7"));
        assert!(numeric.source.is_none());

        assert_eq!(marketplace.plugins[2], PluginDeclaration::default());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(PluginDeclaration::new("p").display_name(), "p");
        assert_eq!(PluginDeclaration::default().display_name(), UNNAMED);
        assert_eq!(PluginDeclaration::new("").display_name(), UNNAMED);
    }

    #[test]
    fn test_falsy_names_display_as_unnamed() {
        let marketplace = Marketplace::parse(
            r#"{"plugins":[{"name":false},{"name":0},{"name":null},{"name":"0"},{}]}"#,
        )
        .unwrap();
        let names: Vec<_> = marketplace
            .plugins
            .iter()
            .map(PluginDeclaration::display_name)
            .collect();
        assert_eq!(names, vec![UNNAMED, UNNAMED, UNNAMED, "0", UNNAMED]);

        let labels: Vec<_> = marketplace
            .plugins
            .iter()
            .map(PluginDeclaration::reference_label)
            .collect();
        assert_eq!(labels, vec!["false", "0", "null", "0", "undefined"]);
    }

    #[test]
    fn test_descriptor_path() {
        let decl = PluginDeclaration::new("p").with_source("./p");
        assert_eq!(
            decl.descriptor_path(Path::new("")),
            Some(PathBuf::from("./p/.claude-plugin/plugin.json"))
        );
        assert_eq!(
            decl.descriptor_path(Path::new("/repo")),
            Some(PathBuf::from("/repo/./p/.claude-plugin/plugin.json"))
        );
        assert_eq!(PluginDeclaration::new("p").descriptor_path(Path::new("")), None);
    }

    #[test]
    fn test_descriptor_path_keeps_trailing_slash() {
        let decl = PluginDeclaration::new("p").with_source("./p/");
        let path = decl.descriptor_path(Path::new("")).unwrap();
        assert_eq!(path.display().to_string(), "./p//.claude-plugin/plugin.json");
    }
}
