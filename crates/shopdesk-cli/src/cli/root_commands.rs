use clap::Subcommand;

use crate::cli::subcommands::auth::AuthCommands;
use crate::cli::subcommands::resources::{
    CategoryCommands, CustomerCommands, FeedbackCommands, OrderCommands, ProductCommands,
    UnitCommands,
};
use crate::cli::subcommands::shop::ShopCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication and session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Active shop selection.
    Shop {
        #[command(subcommand)]
        action: ShopCommands,
    },
    /// Products.
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },
    /// Orders.
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },
    /// Customers.
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },
    /// Product categories.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Measurement units.
    Unit {
        #[command(subcommand)]
        action: UnitCommands,
    },
    /// Customer feedback.
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommands,
    },
}
