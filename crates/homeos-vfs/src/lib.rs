//! In-memory namespace store for HomeOS.
//!
//! The namespace is the simulated filesystem the terminal operates on: a
//! tree of directories where each directory carries a set of child
//! directories and a set of file names. The whole tree lives in one
//! `Namespace` value for the lifetime of a terminal instance; nothing is
//! persisted.

mod tree;

pub use tree::{DirId, Namespace, Resolved};
