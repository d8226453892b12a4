use clap::{Args, Subcommand};

/// Active-shop selection commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ShopCommands {
    /// Show the active shop id and the session's shop record.
    Current,
    /// Select the shop every request is stamped with.
    Switch(ShopSwitchArgs),
    /// Forget the active shop selection.
    Clear,
    /// List every shop the account belongs to.
    List,
}

#[derive(Clone, Debug, Args)]
pub struct ShopSwitchArgs {
    /// Shop id to switch to.
    pub id: String,
}
