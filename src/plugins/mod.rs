//! Plugin marketplace validation.
//!
//! The marketplace manifest declares plugins and where they live; each
//! plugin carries its own `.claude-plugin/plugin.json` descriptor:
//!
//! ```text
//! repo/
//! ├── .claude-plugin/
//! │   └── marketplace.json      {"plugins": [{"name": "my-plugin", "source": "./my-plugin"}]}
//! └── my-plugin/
//!     ├── .claude-plugin/
//!     │   └── plugin.json       {"name", "version", "description", "skills": [...]}
//!     └── skills/
//!         └── commit.md
//! ```
//!
//! [`PluginValidator`] reconciles the two: required descriptor fields,
//! duplicate names, referenced files, and names declared on one side only.
//! References starting with `data/` point at external submodules and are not
//! checked.

pub mod checks;
mod error;
mod manifest;
mod marketplace;
mod report;
mod validator;

pub use error::PluginError;
pub use manifest::{PLUGIN_CONFIG_DIR, PLUGIN_MANIFEST_FILE, PluginManifest};
pub use marketplace::{Marketplace, PluginDeclaration, UNNAMED};
pub use report::{SkippedReference, UNDEFINED_NAME, ValidationIssue, ValidationReport};
pub use validator::PluginValidator;
