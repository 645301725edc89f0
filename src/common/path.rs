use std::path::{Component, Path, PathBuf};

/// Folds `.` and `..` components without touching the filesystem.
///
/// `./p/x/../y.md` becomes `p/y.md`. Leading `..` components that cannot be
/// folded are kept so relative paths never escape silently.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    out.iter().collect()
}

/// Plugin root for a descriptor at `<base>/<marker-dir>/plugin.json`.
pub fn plugin_base_dir(descriptor: &Path) -> &Path {
    descriptor
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""))
}

/// Resolves a descriptor reference against the plugin root.
///
/// Root and prefix components of the reference are dropped, so `/skills/a.md`
/// still lands under `base`.
pub fn resolve_reference(base: &Path, reference: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    path.extend(
        Path::new(reference)
            .components()
            .filter(|c| matches!(c, Component::Normal(_) | Component::CurDir | Component::ParentDir)),
    );
    normalize(&path)
}
