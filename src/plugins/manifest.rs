use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::PluginError;
use crate::common::FileSystem;
use crate::common::json::{attr, string_list, truthy_label};

pub const PLUGIN_CONFIG_DIR: &str = ".claude-plugin";
pub const PLUGIN_MANIFEST_FILE: &str = "plugin.json";

/// A plugin's own `plugin.json`.
///
/// Required attributes are kept optional here: a descriptor missing them is
/// still parsed so every problem can be reported in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct PluginManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<String>,
    pub agents: Vec<String>,
    pub commands: Vec<String>,
    pub scripts: Vec<String>,
}

impl From<Value> for PluginManifest {
    fn from(value: Value) -> Self {
        let field = |key: &str| attr(&value, key).and_then(truthy_label);
        Self {
            name: field("name"),
            version: field("version"),
            description: field("description"),
            skills: string_list(&value, "skills"),
            agents: string_list(&value, "agents"),
            commands: string_list(&value, "commands"),
            scripts: string_list(&value, "scripts"),
        }
    }
}

impl PluginManifest {
    /// Reads and parses a descriptor, keeping I/O and JSON failures apart.
    pub fn load(path: &Path, fs: &dyn FileSystem) -> Result<Self, PluginError> {
        let content = fs
            .read_to_string(path)
            .map_err(|source| PluginError::DescriptorRead {
                path: path.to_path_buf(),
                source,
            })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|source| PluginError::DescriptorJson {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::from(value))
    }

    /// Required attribute by name; `None` when absent or falsy.
    pub fn required(&self, field: &str) -> Option<&str> {
        match field {
            "name" => self.name.as_deref(),
            "version" => self.version.as_deref(),
            "description" => self.description.as_deref(),
            _ => None,
        }
    }

    /// Every referenced path: skills, then agents, commands and scripts.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .chain(&self.agents)
            .chain(&self.commands)
            .chain(&self.scripts)
            .map(String::as_str)
    }
}
