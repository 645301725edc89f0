use std::path::PathBuf;

/// Failures while loading the marketplace manifest or a plugin descriptor.
///
/// Display strings are the exact messages surfaced in validation reports.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Failed to read marketplace.json: {0}")]
    MarketplaceRead(#[source] std::io::Error),

    #[error("Failed to read marketplace.json: {0}")]
    MarketplaceJson(#[source] serde_json::Error),

    #[error("marketplace.json must contain a \"plugins\" array")]
    MissingPluginsArray,

    #[error("{}: failed to read file - {source}", path.display())]
    DescriptorRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: invalid JSON - {source}", path.display())]
    DescriptorJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PluginError::MarketplaceRead(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "ENOENT",
        ));
        assert_eq!(err.to_string(), "Failed to read marketplace.json: ENOENT");

        let err = PluginError::MissingPluginsArray;
        assert_eq!(
            err.to_string(),
            r#"marketplace.json must contain a "plugins" array"#
        );

        let err = PluginError::DescriptorRead {
            path: PathBuf::from("./p/.claude-plugin/plugin.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file missing"),
        };
        assert_eq!(
            err.to_string(),
            "./p/.claude-plugin/plugin.json: failed to read file - file missing"
        );
    }

    #[test]
    fn test_json_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = PluginError::DescriptorJson {
            path: PathBuf::from("test.json"),
            source: json_err,
        };
        assert!(err.to_string().starts_with("test.json: invalid JSON - "));
    }
}
