//! Markdown catalog generation.
//!
//! Scans agent, command and skill markdown sources plus the plugin
//! marketplace manifest, and writes one catalog page per kind and an index:
//!
//! ```text
//! docs/_site/
//! ├── agents.md
//! ├── commands.md
//! ├── skills.md
//! ├── plugins.md
//! └── index.md
//! ```

pub mod catalog;
mod generator;
pub mod markdown;

pub use catalog::{Catalog, CatalogCounts};
pub use generator::{
    AGENTS_PAGE, COMMANDS_PAGE, DocsGenerator, INDEX_PAGE, PLUGINS_PAGE, SKILLS_PAGE,
    generate_docs,
};
