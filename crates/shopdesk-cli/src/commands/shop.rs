use serde::Serialize;
use shopdesk_core::ShopInfo;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::shop::{ShopCommands, ShopSwitchArgs};
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &ShopCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ShopCommands::Current => current(ctx, flags),
        ShopCommands::Switch(args) => switch(args, ctx, flags),
        ShopCommands::Clear => clear(ctx, flags),
        ShopCommands::List => list(ctx, flags).await,
    }
}

/// The two current-shop representations side by side: the request-stamping
/// scalar and the session's cached shop record. They can differ.
#[derive(Serialize)]
struct ShopCurrentResponse {
    active_shop_id: Option<String>,
    default_shop_id_applies: bool,
    session_shop: Option<ShopInfo>,
}

fn current(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selected = ctx.tenant.current_shop_id();
    let effective = ctx.tenant.shop_id_or_default();
    output(
        &ShopCurrentResponse {
            default_shop_id_applies: selected.is_none() && effective.is_some(),
            active_shop_id: effective,
            session_shop: ctx.store.shop(),
        },
        flags.format,
    )
}

#[derive(Serialize)]
struct ShopSwitchResponse {
    active_shop_id: String,
}

fn switch(args: &ShopSwitchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.tenant.set_current_shop_id(&args.id)?;
    output(
        &ShopSwitchResponse {
            active_shop_id: args.id.trim().to_string(),
        },
        flags.format,
    )
}

#[derive(Serialize)]
struct ShopClearResponse {
    cleared: bool,
}

fn clear(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.tenant.clear_current_shop_id()?;
    output(&ShopClearResponse { cleared: true }, flags.format)
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let shops = ctx.shops.list().await?;
    output(&shops, flags.format)
}
