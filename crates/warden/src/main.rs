//! Warden - Entry Point
//!
//! Binary entry point for the `warden` command line tool.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `warden issue -u alice -a user:read` | Print a token for an identity |
//! | `warden verify <TOKEN>` | Print the token's subject or why it was rejected |
//! | `warden check-config` | Validate configuration and list security warnings |

use clap::Parser;
use std::process::ExitCode;
use warden::cli::{Cli, run};
use warden::infrastructure::logging::init_logging;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.loader().extract()?;

    // check-config reports a bad logging section itself
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("warden: logging disabled: {e}");
    }

    let ok = run(&cli, &config, &mut std::io::stdout().lock())?;
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
