use anyhow::Result;
use std::ffi::OsString;
use std::process;

use skills_scanner::platform::DefaultPlatformDetector;
use skills_scanner::runtime::RealRuntime;
use skills_scanner::{LauncherConfig, dispatch, resolve};

/// skills-scanner launcher
///
/// Finds the native skills-scanner binary for this platform and runs it.
/// Every argument is forwarded untouched; the launcher has no flags of its own.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let code = match run(&args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            1
        }
    };
    process::exit(code);
}

async fn run(args: &[OsString]) -> Result<i32> {
    let runtime = RealRuntime;
    let config = LauncherConfig::discover(&runtime)?;
    let binary = resolve(&runtime, &DefaultPlatformDetector, &config)?;
    Ok(dispatch(&runtime, &binary, args).await?)
}
