//! Tree view of a directory
//!
//! The directory itself is not drawn; its entries are the top-level nodes.

use crate::{render_tree, NameProvider, RenderError, Result, TreeContentProvider};
use std::io;
use std::path::{Path, PathBuf};

/// Source of directory entries
pub trait DirectoryListing {
    /// Entries of `dir` as full paths, in display order
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` is a symlink. Links are drawn but not descended into.
    fn is_link(&self, _path: &Path) -> bool {
        false
    }
}

/// [`DirectoryListing`] over the real filesystem, entries sorted by name
#[derive(Debug, Clone, Copy, Default)]
pub struct FsListing;

impl DirectoryListing for FsListing {
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()?;
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_link(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
    }
}

/// Content and names for a directory tree
#[derive(Debug, Clone)]
pub struct DirectoryTree<L> {
    root: PathBuf,
    listing: L,
}

impl<L: DirectoryListing> DirectoryTree<L> {
    pub fn new(root: impl Into<PathBuf>, listing: L) -> Self {
        Self {
            root: root.into(),
            listing,
        }
    }

    /// Render the tree. Fails if the root itself cannot be listed; a
    /// subdirectory that cannot be read is drawn without children.
    pub fn render(&self) -> Result<String> {
        if !self.listing.is_dir(&self.root) {
            return Err(RenderError::NotADirectory(self.root.clone()));
        }
        self.listing.list(&self.root).map_err(|source| RenderError::Io {
            path: self.root.clone(),
            source,
        })?;
        Ok(render_tree(self))
    }

    fn entries(&self, dir: &Path) -> Vec<PathBuf> {
        match self.listing.list(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %dir.display(), error = %err, "skipping unreadable directory");
                Vec::new()
            }
        }
    }
}

impl<L: DirectoryListing> TreeContentProvider<PathBuf> for DirectoryTree<L> {
    fn roots(&self) -> Vec<PathBuf> {
        self.entries(&self.root)
    }

    fn children(&self, node: &PathBuf) -> Vec<PathBuf> {
        if self.listing.is_dir(node) && !self.listing.is_link(node) {
            self.entries(node)
        } else {
            Vec::new()
        }
    }
}

impl<L: DirectoryListing> NameProvider<PathBuf> for DirectoryTree<L> {
    fn name(&self, node: &PathBuf) -> String {
        node.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| node.display().to_string())
    }
}

/// Render the directory at `root` from the real filesystem
pub fn render_dir_tree(root: impl Into<PathBuf>) -> Result<String> {
    DirectoryTree::new(root, FsListing).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    #[test]
    fn test_render_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src").join("main.rs"), "").unwrap();
        fs::write(dir.path().join("src").join("lib.rs"), "").unwrap();
        fs::write(dir.path().join("Cargo.toml"), "").unwrap();

        let expected = ["├── Cargo.toml", "└── src", "    ├── lib.rs", "    └── main.rs"].join("\n");
        assert_eq!(render_dir_tree(dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(render_dir_tree(dir.path()).unwrap(), "");
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_dir_tree(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, RenderError::NotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_ancestor_is_a_leaf() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub").join("up")).unwrap();

        assert_eq!(render_dir_tree(dir.path()).unwrap(), "└── sub\n    └── up");
    }

    /// In-memory listing keyed by path
    struct FakeListing(HashMap<PathBuf, Vec<PathBuf>>);

    impl DirectoryListing for FakeListing {
        fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
            self.0
                .get(dir)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }

        fn is_dir(&self, path: &Path) -> bool {
            path.extension().is_none()
        }
    }

    #[test]
    fn test_unreadable_subdirectory_has_no_children() {
        let listing = FakeListing(HashMap::from([(
            PathBuf::from("top"),
            vec![PathBuf::from("top/locked"), PathBuf::from("top/a.txt")],
        )]));
        let tree = DirectoryTree::new("top", listing);
        assert_eq!(tree.render().unwrap(), "├── locked\n└── a.txt");
    }
}
