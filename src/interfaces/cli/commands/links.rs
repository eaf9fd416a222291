//! Link management commands (public and admin panels)

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::api::ResponseEnvelope;
use crate::context::AppContext;
use crate::interfaces::cli::CliError;
use crate::models::{CreateShortLinkRequest, QueryParams, ShortLinkPatch, ShortLinkRecord};

pub async fn create_link(ctx: &AppContext, request: CreateShortLinkRequest) -> Result<(), CliError> {
    let envelope = ctx.user_api.create_short_link(&request).await?;
    print_record_envelope(envelope)
}

pub async fn query_links(ctx: &AppContext, params: QueryParams) -> Result<(), CliError> {
    let envelope = ctx.admin_api.query_short_links(&params).await?;
    let message = envelope.message.clone();
    let page = envelope.into_result()?;
    let now = Utc::now();

    println!("{} {}", "✓".bold().green(), message);
    if page.list.is_empty() {
        println!("{} No short links on this page", "ℹ".bold().blue());
        return Ok(());
    }

    println!();
    for record in &page.list {
        println!("  {}", format_record(record, now));
    }
    println!();
    println!(
        "{} Page {} ({} shown, {} total)",
        "ℹ".bold().blue(),
        params.effective_page().to_string().cyan(),
        page.list.len().to_string().green(),
        page.total.to_string().green()
    );
    Ok(())
}

pub async fn admin_create_link(
    ctx: &AppContext,
    request: CreateShortLinkRequest,
) -> Result<(), CliError> {
    let envelope = ctx.admin_api.create_short_link(&request).await?;
    print_record_envelope(envelope)
}

pub async fn update_link(ctx: &AppContext, id: u64, patch: ShortLinkPatch) -> Result<(), CliError> {
    let envelope = ctx.admin_api.update_short_link(id, &patch).await?;
    print_record_envelope(envelope)
}

pub async fn delete_link(ctx: &AppContext, id: u64) -> Result<(), CliError> {
    let envelope = ctx.admin_api.delete_short_link(id).await?;
    let message = envelope.message.clone();
    let deleted = envelope.into_result()?;
    println!(
        "{} {} (id {})",
        "✓".bold().green(),
        message,
        deleted.id.to_string().cyan()
    );
    Ok(())
}

fn print_record_envelope(envelope: ResponseEnvelope<ShortLinkRecord>) -> Result<(), CliError> {
    let message = envelope.message.clone();
    let record = envelope.into_result()?;
    println!("{} {}", "✓".bold().green(), message);
    println!("  {}", format_record(&record, Utc::now()));
    Ok(())
}

fn format_record(record: &ShortLinkRecord, now: DateTime<Utc>) -> String {
    let expiry = match record.expire_time() {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => record.expire_at.to_string(),
    };
    let state = if record.is_expired {
        "expired".red().to_string()
    } else {
        "active".green().to_string()
    };
    // 标记与当前时间不一致的记录
    let drift = if record.is_expired != record.is_expired_at(now) {
        " (stale flag)".dimmed().yellow().to_string()
    } else {
        String::new()
    };

    format!(
        "#{} {} -> {} {} {}{}",
        record.id.to_string().cyan(),
        record.short_url.cyan(),
        record.origin_url.blue().underline(),
        format!("(expires: {})", expiry).dimmed().yellow(),
        state,
        drift
    )
}
