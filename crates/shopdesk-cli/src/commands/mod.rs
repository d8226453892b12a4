pub mod auth;
pub mod resources;
pub mod shop;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(&action, ctx, flags).await,
        Commands::Shop { action } => shop::handle(&action, ctx, flags).await,
        Commands::Product { action } => resources::product(&action, ctx, flags).await,
        Commands::Order { action } => resources::order(&action, ctx, flags).await,
        Commands::Customer { action } => resources::customer(&action, ctx, flags).await,
        Commands::Category { action } => resources::category(&action, ctx, flags).await,
        Commands::Unit { action } => resources::unit(&action, ctx, flags).await,
        Commands::Feedback { action } => resources::feedback(&action, ctx, flags).await,
    }
}
