//! Child process execution with inherited standard streams.

use log::{debug, warn};
use std::ffi::OsString;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use super::RealRuntime;

/// How a child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// Exited normally with a numeric code.
    Code(i32),
    /// Killed by a signal (Unix only), carrying the signal number.
    Signal(i32),
    /// Terminated without a code or a signal.
    Unknown,
}

impl ChildExit {
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Code(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Signal(signal);
            }
        }
        Self::Unknown
    }

    /// Exit code the launcher should terminate with.
    ///
    /// Signals follow the shell convention of `128 + signal`.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Code(code) => code,
            Self::Signal(signal) => 128 + signal,
            Self::Unknown => 1,
        }
    }
}

impl RealRuntime {
    #[tracing::instrument(skip(self, args))]
    pub(crate) async fn run_inherited_impl(
        &self,
        program: &Path,
        args: &[OsString],
    ) -> std::io::Result<ChildExit> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        debug!("Spawned {} (pid {:?})", program.display(), child.id());

        // The terminal delivers Ctrl-C to the child as well; the launcher only
        // has to stay alive until the child decides what to do with it.
        loop {
            tokio::select! {
                status = child.wait() => return Ok(ChildExit::from_status(status?)),
                interrupt = tokio::signal::ctrl_c() => match interrupt {
                    Ok(()) => debug!("Interrupt received, waiting for child to exit"),
                    Err(err) => {
                        warn!("Could not listen for interrupts: {}", err);
                        return Ok(ChildExit::from_status(child.wait().await?));
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(ChildExit::Code(0).exit_code(), 0);
        assert_eq!(ChildExit::Code(1).exit_code(), 1);
        assert_eq!(ChildExit::Code(127).exit_code(), 127);
        assert_eq!(ChildExit::Signal(9).exit_code(), 137);
        assert_eq!(ChildExit::Signal(15).exit_code(), 143);
        assert_eq!(ChildExit::Unknown.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_from_status_unix() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait statuses: exit code lives in the high byte, signal in the low bits.
        assert_eq!(ChildExit::from_status(ExitStatus::from_raw(0)), ChildExit::Code(0));
        assert_eq!(
            ChildExit::from_status(ExitStatus::from_raw(127 << 8)),
            ChildExit::Code(127)
        );
        assert_eq!(ChildExit::from_status(ExitStatus::from_raw(9)), ChildExit::Signal(9));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_inherited_propagates_code() {
        let runtime = RealRuntime;
        let args = vec![OsString::from("-c"), OsString::from("exit 3")];
        let exit = runtime
            .run_inherited_impl(Path::new("/bin/sh"), &args)
            .await
            .unwrap();
        assert_eq!(exit, ChildExit::Code(3));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_inherited_reports_signal() {
        let runtime = RealRuntime;
        let args = vec![OsString::from("-c"), OsString::from("kill -9 $$")];
        let exit = runtime
            .run_inherited_impl(Path::new("/bin/sh"), &args)
            .await
            .unwrap();
        assert_eq!(exit, ChildExit::Signal(9));
    }

    #[tokio::test]
    async fn test_run_inherited_missing_program() {
        let runtime = RealRuntime;
        let err = runtime
            .run_inherited_impl(Path::new("/nonexistent/skills-scanner"), &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
