use std::sync::Arc;

use super::catalog::{
    Catalog, CatalogCounts, agents_catalog, commands_catalog, index_page, plugins_catalog,
    skills_catalog,
};
use crate::common::{FileSystem, LocalFs};
use crate::config::DocsConfig;

pub const AGENTS_PAGE: &str = "agents.md";
pub const COMMANDS_PAGE: &str = "commands.md";
pub const SKILLS_PAGE: &str = "skills.md";
pub const PLUGINS_PAGE: &str = "plugins.md";
pub const INDEX_PAGE: &str = "index.md";

/// Builds the four catalog pages concurrently and writes them, plus an
/// index, into the output directory.
pub struct DocsGenerator {
    config: DocsConfig,
    fs: Arc<dyn FileSystem>,
}

impl DocsGenerator {
    pub fn new(config: DocsConfig) -> Self {
        Self {
            config,
            fs: Arc::new(LocalFs),
        }
    }

    pub fn with_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub async fn generate(&self) -> crate::Result<CatalogCounts> {
        let out_dir = &self.config.out_dir;
        tracing::info!(out_dir = %out_dir.display(), "Generating documentation");

        self.fs.create_dir_all(out_dir)?;

        let (agents, commands, skills, plugins) = tokio::try_join!(
            self.spawn_scan(self.config.agents_pattern.clone(), agents_catalog),
            self.spawn_scan(self.config.commands_pattern.clone(), commands_catalog),
            self.spawn_scan(self.config.skills_pattern.clone(), skills_catalog),
            self.spawn_plugins(),
        )?;

        self.write_page(AGENTS_PAGE, &agents)?;
        self.write_page(COMMANDS_PAGE, &commands)?;
        self.write_page(SKILLS_PAGE, &skills)?;
        self.write_page(PLUGINS_PAGE, &plugins)?;

        let counts = CatalogCounts {
            agents: agents.count,
            commands: commands.count,
            skills: skills.count,
            plugins: plugins.count,
        };
        self.fs
            .write(&out_dir.join(INDEX_PAGE), &index_page(&counts))?;

        tracing::debug!(?counts, "Documentation written");
        Ok(counts)
    }

    async fn spawn_scan(
        &self,
        pattern: String,
        scan: fn(&dyn FileSystem, &str) -> crate::Result<Catalog>,
    ) -> crate::Result<Catalog> {
        let fs = Arc::clone(&self.fs);
        tokio::task::spawn_blocking(move || scan(fs.as_ref(), &pattern)).await?
    }

    async fn spawn_plugins(&self) -> crate::Result<Catalog> {
        let fs = Arc::clone(&self.fs);
        let path = self.config.marketplace_path.clone();
        Ok(tokio::task::spawn_blocking(move || plugins_catalog(fs.as_ref(), &path)).await?)
    }

    fn write_page(&self, name: &str, catalog: &Catalog) -> crate::Result<()> {
        let path = self.config.out_dir.join(name);
        self.fs.write(&path, &catalog.content)?;
        tracing::debug!(page = %path.display(), entries = catalog.count, "Wrote catalog page");
        Ok(())
    }
}

/// Runs the generator against the real filesystem.
pub async fn generate_docs(config: DocsConfig) -> crate::Result<CatalogCounts> {
    DocsGenerator::new(config).generate().await
}
