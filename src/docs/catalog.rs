//! Markdown catalog pages.
//!
//! Each catalog scans a glob of markdown sources (or the marketplace manifest
//! for plugins) and renders one page. Counts report matched sources, so an
//! unreadable file still counts even though it gets no entry.

use std::fmt::Write as _;
use std::path::Path;

use super::markdown::{DEFAULT_DESCRIPTION_LENGTH, description, title};
use crate::common::FileSystem;
use crate::plugins::Marketplace;

const MISSING: &str = "-";

/// A rendered catalog page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub content: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub agents: usize,
    pub commands: usize,
    pub skills: usize,
    pub plugins: usize,
}

/// Reads a catalog source. Unreadable and empty files yield `None`.
pub fn read_source(fs: &dyn FileSystem, file: &Path) -> Option<String> {
    match fs.read_to_string(file) {
        Ok(content) if content.is_empty() => None,
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", file.display(), e);
            None
        }
    }
}

/// One `## heading` entry with a path line, optional summary and rule.
pub fn catalog_entry(heading: &str, path_label: &str, path: &Path, content: &str) -> String {
    let mut entry = format!("## {heading}\n\n");
    let _ = write!(entry, "**{path_label}:** `{}`\n\n", path.display());
    let desc = description(content, DEFAULT_DESCRIPTION_LENGTH);
    if !desc.is_empty() {
        let _ = write!(entry, "{desc}\n\n");
    }
    entry.push_str("---\n\n");
    entry
}

fn file_stem(file: &Path) -> String {
    file.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn page_header(heading: &str, count: usize, noun: &str) -> String {
    format!("# {heading}\n\n*{count} {noun} available*\n\n")
}

fn scan(
    fs: &dyn FileSystem,
    pattern: &str,
    header: (&str, &str),
    render: impl Fn(&Path, &str) -> String,
) -> crate::Result<Catalog> {
    let mut files = fs.glob(pattern)?;
    files.sort_by_cached_key(|file| file.to_string_lossy().into_owned());

    let mut content = page_header(header.0, files.len(), header.1);
    for file in &files {
        if let Some(md) = read_source(fs, file) {
            content.push_str(&render(file, &md));
        }
    }

    Ok(Catalog {
        content,
        count: files.len(),
    })
}

pub fn agents_catalog(fs: &dyn FileSystem, pattern: &str) -> crate::Result<Catalog> {
    scan(fs, pattern, ("Agent Catalog", "agents"), |file, md| {
        let name = file_stem(file);
        catalog_entry(title(md).unwrap_or(&name), "File", file, md)
    })
}

pub fn commands_catalog(fs: &dyn FileSystem, pattern: &str) -> crate::Result<Catalog> {
    scan(fs, pattern, ("Command Reference", "commands"), |file, md| {
        catalog_entry(&format!("/{}", file_stem(file)), "File", file, md)
    })
}

pub fn skills_catalog(fs: &dyn FileSystem, pattern: &str) -> crate::Result<Catalog> {
    scan(fs, pattern, ("Skill Matrix", "skills"), |file, md| {
        let dir = file.parent().unwrap_or_else(|| Path::new(""));
        let dir_name = dir
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        catalog_entry(title(md).unwrap_or(&dir_name), "Directory", dir, md)
    })
}

/// Plugin listing from the marketplace manifest. A manifest that fails to
/// load is logged and yields an empty page.
pub fn plugins_catalog(fs: &dyn FileSystem, marketplace_path: &Path) -> Catalog {
    let marketplace = match Marketplace::load(marketplace_path, fs) {
        Ok(marketplace) => marketplace,
        Err(e) => {
            tracing::error!("{}", e);
            return Catalog::default();
        }
    };

    let text = |value: &Option<String>| value.as_deref().unwrap_or(MISSING).to_string();

    let mut content = page_header(
        "Plugin Marketplace",
        marketplace.plugin_count(),
        "plugins",
    );
    let _ = write!(
        content,
        "**Marketplace:** {} v{}\n\n{}\n\n---\n\n",
        text(&marketplace.name),
        text(&marketplace.version),
        text(&marketplace.description),
    );

    for plugin in &marketplace.plugins {
        let _ = write!(
            content,
            "## {}\n\n**Version:** {} | **Category:** {}\n\n{}\n\n",
            text(&plugin.name),
            text(&plugin.version),
            text(&plugin.category),
            text(&plugin.description),
        );
        if let Some(keywords) = &plugin.keywords {
            let _ = write!(content, "**Tags:** {}\n\n", keywords.join(", "));
        }
        content.push_str("---\n\n");
    }

    Catalog {
        content,
        count: marketplace.plugin_count(),
    }
}

pub fn index_page(counts: &CatalogCounts) -> String {
    format!(
        "# Claudius Documentation

Welcome to the Claudius configuration documentation.

## Contents

- [Agents](agents.md) - {} custom agents
- [Commands](commands.md) - {} slash commands
- [Skills](skills.md) - {} skills
- [Plugins](plugins.md) - {} marketplace plugins

## About

Claudius is a personal configuration repository for Claude Code, containing custom agents, commands, skills, and a curated plugin marketplace.

---

*Auto-generated documentation*
",
        counts.agents, counts.commands, counts.skills, counts.plugins
    )
}
