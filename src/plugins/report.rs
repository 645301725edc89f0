use std::fmt;
use std::path::PathBuf;

use super::PluginError;

/// Placeholder printed for a manifest entry without a name.
pub const UNDEFINED_NAME: &str = "undefined";

/// One validation finding. `Display` yields the user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum ValidationIssue {
    #[error(transparent)]
    Load(#[from] PluginError),

    #[error("{}: missing '{field}'", file.display())]
    MissingField { file: PathBuf, field: &'static str },

    #[error("{}: duplicate plugin name '{name}'", file.display())]
    DuplicateName { file: PathBuf, name: String },

    #[error("{}: plugin '{name}' not in marketplace.json", file.display())]
    Undeclared { file: PathBuf, name: String },

    #[error("marketplace.json: plugin '{name}' missing 'source' field")]
    MissingSource { name: String },

    #[error("{}: referenced file not found: {reference}", file.display())]
    MissingReference { file: PathBuf, reference: String },

    #[error("marketplace.json: references non-existent plugin '{name}'")]
    UnknownPlugin { name: String },
}

/// A `data/` reference that was exempt from existence checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedReference {
    pub file: PathBuf,
    pub reference: String,
}

impl fmt::Display for SkippedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.reference)
    }
}

/// Outcome of one validation run, in discovery order.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    /// Descriptor paths attempted, not descriptors that parsed.
    pub plugin_count: usize,
    pub skipped_refs: Vec<SkippedReference>,
}

impl ValidationReport {
    pub(crate) fn fatal(error: PluginError) -> Self {
        Self {
            errors: vec![error.into()],
            ..Default::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
