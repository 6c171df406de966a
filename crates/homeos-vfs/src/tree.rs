//! Directory tree arena.
//!
//! Nodes live in a `BTreeMap<DirId, DirNode>` and reference each other by
//! id: children are `DirId`s, and every non-root node keeps a parent
//! back-reference so ascending is O(1). Names are plain components; there
//! is no path syntax anywhere in this store.

use std::collections::BTreeMap;

use homeos_types::error::{HomeOsError, Result};

/// Stable identifier of a directory in the arena.
///
/// A `DirId` is only handed out by [`Namespace`] and stays valid until the
/// directory it names is removed. The current directory of a session can
/// never be removed (only empty child directories can), so a session-held
/// id never dangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirId(u32);

/// One directory: child directories and files are siblings in a single
/// collision namespace.
#[derive(Debug)]
struct DirNode {
    name: String,
    parent: Option<DirId>,
    children: Vec<DirId>,
    files: Vec<String>,
}

/// Result of classifying a name within a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// The name is a child directory.
    Directory(DirId),
    /// The name is a file in this directory.
    File,
    /// The name does not exist here.
    NotFound,
}

/// The in-memory namespace: an arena of directory nodes with a permanent
/// root.
#[derive(Debug)]
pub struct Namespace {
    nodes: BTreeMap<DirId, DirNode>,
    next_id: u32,
    root: DirId,
}

impl Namespace {
    /// Create a namespace containing only the root directory.
    pub fn new() -> Self {
        let root = DirId(0);
        let mut nodes = BTreeMap::new();
        nodes.insert(
            root,
            DirNode {
                name: "root".to_string(),
                parent: None,
                children: Vec::new(),
                files: Vec::new(),
            },
        );
        Self {
            nodes,
            next_id: 1,
            root,
        }
    }

    /// The root directory. Permanent: it is never a child of any node, so
    /// no removal can target it.
    pub fn root(&self) -> DirId {
        self.root
    }

    /// Name of a directory.
    pub fn name(&self, dir: DirId) -> &str {
        &self.node(dir).name
    }

    /// Parent of a directory, `None` for the root.
    pub fn parent_of(&self, dir: DirId) -> Option<DirId> {
        self.node(dir).parent
    }

    /// Classify `name` within `parent`.
    pub fn resolve_child(&self, parent: DirId, name: &str) -> Resolved {
        let node = self.node(parent);
        for &child in &node.children {
            if self.node(child).name == name {
                return Resolved::Directory(child);
            }
        }
        if node.files.iter().any(|f| f == name) {
            Resolved::File
        } else {
            Resolved::NotFound
        }
    }

    /// Child directory names and file names, each sorted. Both empty is a
    /// valid result, not an error.
    pub fn list(&self, dir: DirId) -> (Vec<String>, Vec<String>) {
        let node = self.node(dir);
        let mut dirs: Vec<String> = node
            .children
            .iter()
            .map(|&c| self.node(c).name.clone())
            .collect();
        dirs.sort();
        let mut files = node.files.clone();
        files.sort();
        (dirs, files)
    }

    /// True if `dir` has no child directories and no files.
    pub fn is_empty(&self, dir: DirId) -> bool {
        let node = self.node(dir);
        node.children.is_empty() && node.files.is_empty()
    }

    /// Number of directories in the arena (root included).
    pub fn dir_count(&self) -> usize {
        self.nodes.len()
    }

    /// Create an empty directory named `name` under `parent`.
    pub fn create_dir(&mut self, parent: DirId, name: &str) -> Result<DirId> {
        if name.is_empty() {
            return Err(HomeOsError::InvalidArgument("empty name".to_string()));
        }
        if self.resolve_child(parent, name) != Resolved::NotFound {
            return Err(HomeOsError::AlreadyExists(name.to_string()));
        }
        let id = DirId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            DirNode {
                name: name.to_string(),
                parent: Some(parent),
                children: Vec::new(),
                files: Vec::new(),
            },
        );
        self.node_mut(parent).children.push(id);
        Ok(id)
    }

    /// Create a file named `name` under `parent`.
    pub fn create_file(&mut self, parent: DirId, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(HomeOsError::InvalidArgument("empty name".to_string()));
        }
        if self.resolve_child(parent, name) != Resolved::NotFound {
            return Err(HomeOsError::AlreadyExists(name.to_string()));
        }
        self.node_mut(parent).files.push(name.to_string());
        Ok(())
    }

    /// Remove the file `name` from `parent`. A child directory of the same
    /// name does not count: files only.
    pub fn remove_file(&mut self, parent: DirId, name: &str) -> Result<()> {
        let node = self.node_mut(parent);
        match node.files.iter().position(|f| f == name) {
            Some(idx) => {
                node.files.remove(idx);
                Ok(())
            },
            None => Err(HomeOsError::NotFound(name.to_string())),
        }
    }

    /// Remove the child directory `name` from `parent`. Fails with
    /// `NotFound` if there is no such child directory and with `NotEmpty`
    /// if it still has any child directory or file.
    pub fn remove_dir(&mut self, parent: DirId, name: &str) -> Result<()> {
        let target = match self.resolve_child(parent, name) {
            Resolved::Directory(id) => id,
            Resolved::File | Resolved::NotFound => {
                return Err(HomeOsError::NotFound(name.to_string()));
            },
        };
        if !self.is_empty(target) {
            return Err(HomeOsError::NotEmpty(name.to_string()));
        }
        self.node_mut(parent).children.retain(|&c| c != target);
        self.nodes.remove(&target);
        Ok(())
    }

    fn node(&self, id: DirId) -> &DirNode {
        &self.nodes[&id]
    }

    fn node_mut(&mut self, id: DirId) -> &mut DirNode {
        match self.nodes.get_mut(&id) {
            Some(node) => node,
            // A DirId outliving its directory is a bug in the caller.
            None => unreachable!("dangling DirId({})", id.0),
        }
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}
