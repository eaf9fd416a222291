//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

use crate::config::BackendKind;
use crate::models::{SortField, SortOrder};

/// quanklink - short link console
#[derive(Parser)]
#[command(name = "quanklink")]
#[command(version)]
#[command(about = "Create and manage quank short links", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the configured backend
    #[arg(long, short = 'b', global = true)]
    pub backend: Option<BackendKind>,

    /// Session file holding the admin token
    #[arg(long, short = 's', global = true)]
    pub session: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a short link from the public panel
    Create {
        /// Original URL
        origin_url: String,
    },

    /// List short links (admin)
    Query {
        #[arg(long)]
        page: Option<u64>,

        #[arg(long)]
        page_size: Option<u64>,

        /// Sort field: id, origin_url, short_url, expire_at, is_expired
        #[arg(long)]
        sort: Option<SortField>,

        /// asc or desc
        #[arg(long)]
        order: Option<SortOrder>,
    },

    /// Create a short link (admin)
    AdminCreate {
        origin_url: String,

        /// Custom short URL
        #[arg(long)]
        short_url: Option<String>,

        /// Expiration as epoch seconds
        #[arg(long)]
        expire_at: Option<i64>,
    },

    /// Update a short link (admin)
    Update {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        id: u64,

        #[arg(long)]
        origin_url: Option<String>,

        #[arg(long)]
        short_url: Option<String>,

        #[arg(long)]
        expire_at: Option<i64>,

        #[arg(long)]
        expired: Option<bool>,
    },

    /// Delete a short link (admin)
    Delete {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        id: u64,
    },

    /// Resolve a route through the navigation guard
    Navigate { path: String },

    /// Store an admin token in the session
    Login {
        token: String,

        /// Login location carrying the post-login redirect
        #[arg(long, default_value = "/login")]
        from: String,
    },

    /// Remove the stored admin token
    Logout,

    /// Show where the dev proxy forwards a local path
    Proxy { path: String },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,
    },
}
