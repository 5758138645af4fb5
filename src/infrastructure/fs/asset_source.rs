//! File System Asset Source
//!
//! Implements the AssetSource port by walking the build directory.

use std::io;
use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::entities::{AssetFile, AssetPath};
use crate::domain::ports::AssetSource;

/// Walks a directory on local disk
///
/// Matches the `build/static/**/*` glob it replaces: regular files at any
/// depth, dot-files and dot-directories skipped, ignore files not honoured.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSource;

impl FsAssetSource {
    pub fn new() -> Self {
        Self
    }
}

impl AssetSource for FsAssetSource {
    fn discover(&self, root: &Path) -> io::Result<Vec<AssetPath>> {
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", root.display()),
            ));
        }

        let walker = WalkBuilder::new(root)
            .hidden(true)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .follow_links(true)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        let mut assets = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"))
            })?;

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| io::Error::other(e.to_string()))?
                .to_path_buf();

            tracing::trace!(path = %relative.display(), "discovered");
            assets.push(AssetPath::new(entry.path(), relative));
        }

        assets.sort();
        Ok(assets)
    }

    fn load(&self, path: AssetPath) -> io::Result<AssetFile> {
        let contents = std::fs::read(path.source_path())?;
        Ok(path.with_contents(contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn relative_paths(assets: &[AssetPath]) -> Vec<PathBuf> {
        assets.iter().map(|a| a.relative_path().to_path_buf()).collect()
    }

    #[test]
    fn discovers_nested_files_in_sorted_order() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("js")).unwrap();
        fs::create_dir_all(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("js/app.js"), "a").unwrap();
        fs::write(dir.path().join("css/main.css"), "b").unwrap();
        fs::write(dir.path().join("index.txt"), "c").unwrap();

        let assets = FsAssetSource::new().discover(dir.path()).unwrap();

        assert_eq!(
            relative_paths(&assets),
            vec![
                PathBuf::from("css").join("main.css"),
                PathBuf::from("index.txt"),
                PathBuf::from("js").join("app.js"),
            ]
        );
    }

    #[test]
    fn skips_dotfiles_and_empty_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".cache")).unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        fs::write(dir.path().join(".cache/blob"), "x").unwrap();
        fs::write(dir.path().join(".DS_Store"), "x").unwrap();
        fs::write(dir.path().join("app.js"), "x").unwrap();

        let assets = FsAssetSource::new().discover(dir.path()).unwrap();

        assert_eq!(relative_paths(&assets), vec![PathBuf::from("app.js")]);
    }

    #[test]
    fn does_not_honour_gitignore() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.js.map"), "x").unwrap();
        fs::write(dir.path().join(".gitignore"), "*.map\n").unwrap();
        fs::write(dir.path().join(".ignore"), "*.map\n").unwrap();

        let assets = FsAssetSource::new().discover(dir.path()).unwrap();

        assert_eq!(relative_paths(&assets), vec![PathBuf::from("app.js.map")]);
    }

    #[test]
    fn missing_root_is_not_found() {
        let dir = tempdir().unwrap();
        let err = FsAssetSource::new()
            .discover(&dir.path().join("build/static"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_reads_contents() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();

        let source = FsAssetSource::new();
        let asset = source.discover(dir.path()).unwrap().remove(0);
        let file = source.load(asset).unwrap();

        assert_eq!(file.contents(), b"hello");
    }
}
