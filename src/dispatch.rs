//! Running the resolved binary in place of the launcher.

use log::debug;
use std::ffi::OsString;
use std::path::Path;

use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// Run `binary` with `args` forwarded verbatim and return the exit code the
/// launcher should terminate with.
///
/// Standard streams are inherited and nothing goes through a shell. A child
/// that cannot be started yields [`Error::ChildLaunch`].
#[tracing::instrument(skip(runtime, args))]
pub async fn dispatch<R: Runtime>(runtime: &R, binary: &Path, args: &[OsString]) -> Result<i32> {
    debug!("Launching {} with {} argument(s)", binary.display(), args.len());

    let exit = runtime
        .run_inherited(binary, args)
        .await
        .map_err(|source| Error::ChildLaunch {
            binary: binary.to_path_buf(),
            source,
        })?;

    debug!("Child terminated: {:?}", exit);
    Ok(exit.exit_code())
}
