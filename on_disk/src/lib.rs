//! This crate provides an object store that keeps content on the local file system.
//!
//! **IMPORTANT NOTE:** This is intended as a reference implementation largely
//! for testing purposes and may not necessarily handle all of the edge cases that
//! the traditional `git` command-line interface will handle.
//!
//! That said, it does intentionally use the same loose object format as
//! command-line git so that objects it writes can be read by other tools.

#![deny(warnings)]

pub mod durable;

mod loose;

mod on_disk_repo;
pub use on_disk_repo::OnDiskRepo;

mod workspace;
pub use workspace::Workspace;
