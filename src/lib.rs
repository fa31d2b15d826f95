//! Launcher for the prebuilt `skills-scanner` binary.
//!
//! The launcher maps the host platform onto a published target, finds the
//! binary in the matching optional package (or a local release build) and
//! runs it with the caller's arguments and standard streams.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod package;
pub mod platform;
pub mod resolve;
pub mod runtime;
pub mod verify;

pub use config::LauncherConfig;
pub use dispatch::dispatch;
pub use error::{Error, Result};
pub use resolve::{Strategy, resolve};
pub use verify::{Verification, verify};
