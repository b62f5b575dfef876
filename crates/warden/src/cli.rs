//! `warden` command line tool
//!
//! Operator utilities around the authentication core: mint a token for an
//! identity, inspect a token, and check a configuration before deploying it.

use crate::domain::{Identity, Role};
use crate::infrastructure::auth::TokenCodec;
use crate::infrastructure::config::{AppConfig, ConfigLoader, loader::validate_app_config};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

/// Command line interface for Warden
#[derive(Parser, Debug)]
#[command(name = "warden")]
#[command(about = "Warden - session tokens and login lockout")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Issue a session token and print it
    Issue {
        /// Subject of the token
        #[arg(short, long)]
        username: String,

        /// Authority to grant; repeatable
        #[arg(short, long = "authority")]
        authorities: Vec<String>,

        /// Grant the authorities of a role (e.g. ROLE_HR)
        #[arg(short, long)]
        role: Option<Role>,
    },

    /// Verify a token and print its subject and authorities
    Verify {
        /// Token to verify, without scheme prefix
        token: String,
    },

    /// Load and validate the configuration, then print security warnings
    CheckConfig,
}

impl Cli {
    /// Loader honouring `--config`
    pub fn loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        }
    }
}

/// Run a parsed command against a merged, not yet validated configuration
///
/// Returns `Ok(false)` when the command ran but its verdict is negative
/// (rejected token, invalid configuration).
pub fn run<W: Write>(cli: &Cli, config: &AppConfig, out: &mut W) -> anyhow::Result<bool> {
    match &cli.command {
        Command::Issue {
            username,
            authorities,
            role,
        } => issue(config, username, authorities, *role, out),
        Command::Verify { token } => verify(config, token, out),
        Command::CheckConfig => check_config(config, out),
    }
}

fn issue<W: Write>(
    config: &AppConfig,
    username: &str,
    authorities: &[String],
    role: Option<Role>,
    out: &mut W,
) -> anyhow::Result<bool> {
    let mut granted: BTreeSet<String> = authorities.iter().cloned().collect();
    if let Some(role) = role {
        granted.extend(role.authorities().iter().map(|a| (*a).to_string()));
    }

    let identity = Identity::new(username, granted)?;
    let codec = TokenCodec::with_system_clock(&config.auth.token)
        .context("Cannot issue tokens with this configuration")?;
    let issued = codec.issued(&identity)?;

    writeln!(out, "{}", issued.token)?;
    tracing::info!(
        subject = identity.username(),
        expires_at = issued.expires_at,
        "Token issued from the command line"
    );
    Ok(true)
}

fn verify<W: Write>(config: &AppConfig, token: &str, out: &mut W) -> anyhow::Result<bool> {
    let codec = TokenCodec::with_system_clock(&config.auth.token)
        .context("Cannot verify tokens with this configuration")?;

    match codec.verify_claims(token.trim()) {
        Ok(claims) => {
            writeln!(out, "subject: {}", claims.sub)?;
            writeln!(out, "authorities: {}", claims.authorities.join(", "))?;
            writeln!(out, "issued_at: {}", claims.iat)?;
            writeln!(out, "expires_at: {}", claims.exp)?;
            Ok(true)
        }
        Err(reason) => {
            writeln!(out, "rejected: {reason}")?;
            Ok(false)
        }
    }
}

fn check_config<W: Write>(config: &AppConfig, out: &mut W) -> anyhow::Result<bool> {
    let valid = match validate_app_config(config) {
        Ok(()) => {
            writeln!(out, "configuration OK")?;
            true
        }
        Err(e) => {
            writeln!(out, "configuration invalid: {e}")?;
            false
        }
    };

    for warning in config.auth.security_warnings() {
        writeln!(
            out,
            "[{:?}] {}: {}",
            warning.severity, warning.code, warning.message
        )?;
    }
    Ok(valid)
}
