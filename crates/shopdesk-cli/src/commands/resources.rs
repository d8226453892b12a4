//! Handlers for the per-resource read/write commands.

use serde::Serialize;
use shopdesk_services::feedback::FeedbackRequest;
use shopdesk_services::products::NewProduct;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::resources::{
    CategoryCommands, CustomerCommands, FeedbackCommands, OrderCommands, ProductCommands,
    UnitCommands,
};
use crate::context::AppContext;
use crate::output::output;

pub async fn product(
    action: &ProductCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProductCommands::List(args) => {
            let products = ctx.products.list(args.search.as_deref()).await?;
            output(&products, flags.format)
        }
        ProductCommands::Get { id } => {
            let product = ctx.products.get(id).await?;
            output(&product, flags.format)
        }
        ProductCommands::Create(args) => {
            let product = ctx
                .products
                .create(&NewProduct {
                    name: args.name.clone(),
                    price: args.price,
                    quantity: args.quantity,
                    category_id: args.category_id.clone(),
                    unit_id: args.unit_id.clone(),
                })
                .await?;
            output(&product, flags.format)
        }
    }
}

pub async fn order(
    action: &OrderCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OrderCommands::List(args) => {
            let orders = ctx.orders.list(args.status.as_deref()).await?;
            output(&orders, flags.format)
        }
        OrderCommands::Get { id } => {
            let order = ctx.orders.get(id).await?;
            output(&order, flags.format)
        }
    }
}

pub async fn customer(
    action: &CustomerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CustomerCommands::List => {
            let customers = ctx.customers.list().await?;
            output(&customers, flags.format)
        }
        CustomerCommands::Get { id } => {
            let customer = ctx.customers.get(id).await?;
            output(&customer, flags.format)
        }
    }
}

pub async fn category(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List => {
            let categories = ctx.categories.list().await?;
            output(&categories, flags.format)
        }
    }
}

pub async fn unit(
    action: &UnitCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UnitCommands::List => {
            let units = ctx.units.list().await?;
            output(&units, flags.format)
        }
    }
}

#[derive(Serialize)]
struct FeedbackResponse {
    submitted: bool,
}

pub async fn feedback(
    action: &FeedbackCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FeedbackCommands::Send(args) => {
            ctx.feedback
                .submit(&FeedbackRequest {
                    rating: args.rating,
                    comment: args.comment.clone(),
                    customer_id: args.customer_id.clone(),
                })
                .await?;
            output(&FeedbackResponse { submitted: true }, flags.format)
        }
    }
}
