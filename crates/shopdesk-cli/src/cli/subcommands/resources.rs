use clap::{Args, Subcommand};

/// Product commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductCommands {
    /// List products for the active shop.
    List(ProductListArgs),
    /// Show one product.
    Get { id: String },
    /// Create a product.
    Create(ProductCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProductListArgs {
    /// Filter by name.
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProductCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub price: f64,
    #[arg(long)]
    pub quantity: i64,
    #[arg(long)]
    pub category_id: Option<String>,
    #[arg(long)]
    pub unit_id: Option<String>,
}

/// Order commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrderCommands {
    /// List orders for the active shop.
    List(OrderListArgs),
    /// Show one order.
    Get { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct OrderListArgs {
    /// Filter by domain status (pending, completed, ...).
    #[arg(long)]
    pub status: Option<String>,
}

/// Customer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CustomerCommands {
    /// List customers for the active shop.
    List,
    /// Show one customer.
    Get { id: String },
}

/// Category commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// List product categories.
    List,
}

/// Unit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UnitCommands {
    /// List measurement units.
    List,
}

/// Feedback commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FeedbackCommands {
    /// Submit a feedback entry.
    Send(FeedbackSendArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FeedbackSendArgs {
    /// 1-5 star rating.
    #[arg(long)]
    pub rating: u8,
    #[arg(long)]
    pub comment: Option<String>,
    #[arg(long)]
    pub customer_id: Option<String>,
}
