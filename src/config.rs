//! Run configuration for the validator and the catalog generator.
//!
//! Defaults follow the repository layout: the marketplace manifest lives at
//! `.claude-plugin/marketplace.json` and catalog sources under `dotclaude/`.

use std::path::PathBuf;

pub const DEFAULT_MARKETPLACE_PATH: &str = ".claude-plugin/marketplace.json";
pub const DEFAULT_DOCS_OUT_DIR: &str = "docs/_site";
pub const DEFAULT_AGENTS_PATTERN: &str = "dotclaude/agents/**/*.md";
pub const DEFAULT_COMMANDS_PATTERN: &str = "dotclaude/commands/**/*.md";
pub const DEFAULT_SKILLS_PATTERN: &str = "dotclaude/skills/**/SKILL.md";

/// Environment variable that enables full error chains on unexpected failures.
pub const DEBUG_ENV: &str = "DEBUG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub marketplace_path: PathBuf,
    /// Directory plugin `source` paths are resolved against.
    pub root_dir: PathBuf,
    /// Collect skipped `data/` references for reporting.
    pub verbose: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            marketplace_path: PathBuf::from(DEFAULT_MARKETPLACE_PATH),
            root_dir: PathBuf::new(),
            verbose: false,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marketplace_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.marketplace_path = path.into();
        self
    }

    pub fn with_root_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root_dir = dir.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    pub out_dir: PathBuf,
    pub marketplace_path: PathBuf,
    pub agents_pattern: String,
    pub commands_pattern: String,
    pub skills_pattern: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_DOCS_OUT_DIR),
            marketplace_path: PathBuf::from(DEFAULT_MARKETPLACE_PATH),
            agents_pattern: DEFAULT_AGENTS_PATTERN.into(),
            commands_pattern: DEFAULT_COMMANDS_PATTERN.into(),
            skills_pattern: DEFAULT_SKILLS_PATTERN.into(),
        }
    }
}

impl DocsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn with_marketplace_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.marketplace_path = path.into();
        self
    }

    pub fn with_agents_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.agents_pattern = pattern.into();
        self
    }

    pub fn with_commands_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.commands_pattern = pattern.into();
        self
    }

    pub fn with_skills_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.skills_pattern = pattern.into();
        self
    }
}

/// `true` when `DEBUG` is set to a non-empty value.
pub fn debug_enabled() -> bool {
    std::env::var_os(DEBUG_ENV).is_some_and(|v| !v.is_empty())
}
