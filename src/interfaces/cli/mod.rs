//! CLI interface module
//!
//! Plays the role of the two panels: `create` is the public panel, the
//! admin commands go through the navigation guard for `/admin` first.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::context::AppContext;
use crate::errors::QuankError;
use crate::models::{CreateShortLinkRequest, QueryParams, ShortLinkPatch};

#[derive(Debug)]
pub enum CliError {
    ParseError(String),
    CommandError(String),
    /// The guard sent an admin command to the login page
    LoginRequired { redirect: String },
    Api(QuankError),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::LoginRequired { redirect } => {
                format!("Login required: run `quanklink login <token>` (redirect: {})", redirect)
            }
            CliError::Api(err) => err.format_simple(),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::LoginRequired { redirect } => format!(
                "{} run {} first (redirect: {})",
                "Login required:".yellow().bold(),
                "quanklink login <token>".cyan(),
                redirect.blue()
            ),
            CliError::Api(err) => err.format_colored(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<QuankError> for CliError {
    fn from(err: QuankError) -> Self {
        match err {
            QuankError::Validation(msg) => CliError::ParseError(msg),
            other => CliError::Api(other),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, ctx: &AppContext) -> Result<(), CliError> {
    match cmd {
        Commands::Create { origin_url } => {
            let url = crate::utils::validate_origin_url(&origin_url)?;
            commands::create_link(ctx, CreateShortLinkRequest::new(url.as_str())).await
        }

        Commands::Query {
            page,
            page_size,
            sort,
            order,
        } => {
            commands::ensure_admin(ctx)?;
            let params = QueryParams {
                page,
                page_size,
                sort,
                order,
            };
            commands::query_links(ctx, params).await
        }

        Commands::AdminCreate {
            origin_url,
            short_url,
            expire_at,
        } => {
            commands::ensure_admin(ctx)?;
            let url = crate::utils::validate_origin_url(&origin_url)?;
            let request = CreateShortLinkRequest {
                origin_url: url.to_string(),
                short_url,
                expire_at,
            };
            commands::admin_create_link(ctx, request).await
        }

        Commands::Update {
            id,
            origin_url,
            short_url,
            expire_at,
            expired,
        } => {
            commands::ensure_admin(ctx)?;
            let origin_url = origin_url
                .map(|u| crate::utils::validate_origin_url(&u).map(|u| u.to_string()))
                .transpose()?;
            let patch = ShortLinkPatch {
                origin_url,
                short_url,
                expire_at,
                is_expired: expired,
            };
            if patch.is_empty() {
                return Err(CliError::ParseError(
                    "Update requires at least one field to change".to_string(),
                ));
            }
            commands::update_link(ctx, id, patch).await
        }

        Commands::Delete { id } => {
            commands::ensure_admin(ctx)?;
            commands::delete_link(ctx, id).await
        }

        Commands::Navigate { path } => commands::navigate(ctx, &path),

        Commands::Login { token, from } => commands::login(ctx, &token, &from),

        Commands::Logout => commands::logout(ctx),

        Commands::Proxy { path } => commands::show_proxy(ctx, &path),

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path } => commands::config_generate(output_path),
        },
    }
}
