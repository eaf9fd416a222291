//! Navigation, session and proxy commands

use colored::Colorize;

use crate::api::rewrite_proxy_path;
use crate::context::AppContext;
use crate::interfaces::cli::CliError;
use crate::router::{Location, Navigation, REDIRECT_QUERY_KEY, Router};

pub const ADMIN_PATH: &str = "/admin";

/// Run the guard for the admin panel before any admin command.
pub fn ensure_admin(ctx: &AppContext) -> Result<(), CliError> {
    match ctx.router.navigate(ADMIN_PATH)? {
        Navigation::Proceed(_) => Ok(()),
        Navigation::Redirected { to, .. } => Err(CliError::LoginRequired {
            redirect: to
                .location
                .query
                .get(REDIRECT_QUERY_KEY)
                .cloned()
                .unwrap_or_else(|| ADMIN_PATH.to_string()),
        }),
    }
}

pub fn navigate(ctx: &AppContext, path: &str) -> Result<(), CliError> {
    match ctx.router.navigate(path)? {
        Navigation::Proceed(resolved) => {
            println!(
                "{} {} -> {:?}",
                "✓".bold().green(),
                resolved.location.full_path().cyan(),
                resolved.route.name
            );
        }
        Navigation::Redirected { from, to } => {
            println!(
                "{} {} -> {} ({:?})",
                "↪".bold().yellow(),
                from.full_path().cyan(),
                to.location.full_path().blue(),
                to.route.name
            );
        }
    }
    Ok(())
}

pub fn login(ctx: &AppContext, token: &str, from: &str) -> Result<(), CliError> {
    ctx.session.set_token(token)?;
    let target = Router::post_login_target(&Location::parse(from));
    println!("{} Token stored", "✓".bold().green());
    navigate(ctx, &target)
}

pub fn logout(ctx: &AppContext) -> Result<(), CliError> {
    if ctx.session.clear_token()? {
        println!("{} Token removed", "✓".bold().green());
    } else {
        println!("{} No token stored", "ℹ".bold().blue());
    }
    Ok(())
}

pub fn show_proxy(ctx: &AppContext, path: &str) -> Result<(), CliError> {
    let api = &ctx.config.api;
    match rewrite_proxy_path(path, &api.proxy_prefix, &api.base_url) {
        Some(upstream) => println!("{} -> {}", path.cyan(), upstream.blue().underline()),
        None => println!("{} {} is served locally", "ℹ".bold().blue(), path.cyan()),
    }
    Ok(())
}
