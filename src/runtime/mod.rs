//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Process information (current executable)
//! - `fs` - File system queries (existence, reading, canonicalization)
//! - `process` - Running a child process with inherited standard streams

mod env;
mod fs;
mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use process::ChildExit;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // File System
    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Canonicalize a path by resolving all symlinks and returning the canonical absolute path.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    // Process
    fn current_exe(&self) -> Result<PathBuf>;

    /// Run `program` directly (never through a shell) with the given arguments,
    /// inheriting stdin, stdout and stderr, and wait for it to terminate.
    /// An `Err` means the process could not be started or waited on.
    async fn run_inherited(&self, program: &Path, args: &[OsString]) -> std::io::Result<ChildExit>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.is_file_impl(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.canonicalize_impl(path)
    }

    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    async fn run_inherited(&self, program: &Path, args: &[OsString]) -> std::io::Result<ChildExit> {
        self.run_inherited_impl(program, args).await
    }
}
