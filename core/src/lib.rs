//! This crate implements the object model for a minimal content-addressable
//! object store in the style of git: object identity, the canonical encodings
//! of blobs, trees, and commits, and the abstract `Repo` that persists them.
//!
//! Nothing in this crate performs I/O. See `minigit_on_disk` for a repository
//! that stores objects on the local file system.

#![deny(warnings)]

pub mod object;
pub mod repo;
