use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use skills_scanner::platform::DefaultPlatformDetector;
use skills_scanner::runtime::RealRuntime;
use skills_scanner::{LauncherConfig, verify};

/// skills-scanner postinstall check
///
/// Reports whether the platform package for this machine was installed.
/// Always exits successfully so it never breaks an install.
#[derive(Parser, Debug)]
#[command(name = "skills-scanner-postinstall", version = env!("SKILLS_SCANNER_VERSION"), about)]
struct Cli {
    /// Directory to start the package lookup from (defaults to the launcher root)
    #[arg(long = "root", short = 'r', value_name = "PATH")]
    root: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    // Bad arguments must not fail the install either
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return;
        }
    };

    if let Err(err) = run(cli) {
        log::warn!("skills-scanner: postinstall check failed: {err:#}");
    }
}

fn run(cli: Cli) -> Result<()> {
    let runtime = RealRuntime;
    let config = match cli.root {
        Some(root) => LauncherConfig::with_root(&runtime, &root)?,
        None => LauncherConfig::discover(&runtime)?,
    };

    let verification = verify(&runtime, &DefaultPlatformDetector, &config);
    verification.emit(&mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_root() {
        let cli = Cli::try_parse_from(["skills-scanner-postinstall"]).unwrap();
        assert_eq!(cli.root, None);
    }

    #[test]
    fn test_cli_root_parsing() {
        let cli = Cli::try_parse_from(["skills-scanner-postinstall", "--root", "/tmp"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp")));

        let cli = Cli::try_parse_from(["skills-scanner-postinstall", "-r", "/opt"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/opt")));
    }

    #[test]
    fn test_cli_rejects_positional() {
        assert!(Cli::try_parse_from(["skills-scanner-postinstall", "extra"]).is_err());
    }
}
