//! # gotosync-cli
//!
//! Command-line interface for GotoSync.
//!
//! ## Commands
//!
//! - `gotosync sync` - Pull event registrants from the GoTo products and
//!   push them into the CRM
//!
//! ## Configuration
//!
//! Settings come from `GOTOSYNC_*` environment variables or a config file
//! (`gotosync.toml` / `gotosync.json`); see `gotosync_infra::config` for the
//! probing order.

pub mod commands;

use clap::{Parser, Subcommand};

/// Registrant synchronization from GoTo conferencing products into the CRM.
#[derive(Debug, Parser)]
#[command(name = "gotosync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Synchronize event registrants into the CRM.
    Sync(commands::sync::SyncArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_accepts_product_and_id_flags() {
        let cli = Cli::parse_from(["gotosync", "sync", "--product", "webinar", "--id", "9001"]);
        let Commands::Sync(args) = cli.command;
        assert_eq!(args.product.as_deref(), Some("webinar"));
        assert_eq!(args.id.as_deref(), Some("9001"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_sync_short_flags() {
        let cli = Cli::parse_from(["gotosync", "sync", "-p", "meeting", "-i", "42", "--verbose"]);
        let Commands::Sync(args) = cli.command;
        assert_eq!(args.product.as_deref(), Some("meeting"));
        assert_eq!(args.id.as_deref(), Some("42"));
        assert!(args.verbose);
    }

    #[test]
    fn test_sync_defaults_to_everything() {
        let cli = Cli::parse_from(["gotosync", "sync"]);
        let Commands::Sync(args) = cli.command;
        assert!(args.product.is_none());
        assert!(args.id.is_none());
    }
}
