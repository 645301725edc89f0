//! # claudius-docs
//!
//! Validation and documentation tooling for a plugin marketplace repository.
//!
//! - [`plugins`] cross-checks `.claude-plugin/marketplace.json` against every
//!   plugin's own `plugin.json` descriptor.
//! - [`docs`] renders agent, command, skill and plugin catalog pages.
//!
//! ## Validating a marketplace
//!
//! ```rust,no_run
//! use claudius_docs::{PluginValidator, ValidatorConfig};
//!
//! let report = PluginValidator::new(ValidatorConfig::default().verbose(true)).validate();
//! for message in report.messages() {
//!     eprintln!("{message}");
//! }
//! assert!(report.is_ok());
//! ```
//!
//! ## Generating catalogs
//!
//! ```rust,no_run
//! use claudius_docs::{DocsConfig, docs::generate_docs};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), claudius_docs::Error> {
//!     let counts = generate_docs(DocsConfig::default()).await?;
//!     println!("{} agents, {} skills", counts.agents, counts.skills);
//!     Ok(())
//! }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod cli;
pub mod common;
pub mod config;
pub mod docs;
pub mod observability;
pub mod plugins;

pub use common::{FileSystem, InMemoryFs, LocalFs};
pub use config::{DocsConfig, ValidatorConfig};
pub use docs::{CatalogCounts, DocsGenerator};
pub use plugins::{
    Marketplace, PluginDeclaration, PluginError, PluginManifest, PluginValidator,
    SkippedReference, ValidationIssue, ValidationReport,
};

/// Error type for claudius-docs operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// File system operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest or descriptor could not be loaded.
    #[error(transparent)]
    Plugin(#[from] PluginError),

    /// A catalog task panicked or was cancelled.
    #[error("Catalog task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::from(std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "IO error: disk full");

        let err = Error::from(PluginError::MissingPluginsArray);
        assert_eq!(
            err.to_string(),
            r#"marketplace.json must contain a "plugins" array"#
        );
    }
}
