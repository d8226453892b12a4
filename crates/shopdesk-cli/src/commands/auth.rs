use serde::Serialize;
use shopdesk_services::auth::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};
use shopdesk_services::session::SessionState;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::{
    AuthCommands, AuthForgotPasswordArgs, AuthLoginArgs, AuthRegisterArgs, AuthResetPasswordArgs,
};
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login(args, ctx, flags).await,
        AuthCommands::Register(args) => register(args, ctx, flags).await,
        AuthCommands::Logout => logout(ctx, flags).await,
        AuthCommands::Status => status(ctx, flags),
        AuthCommands::ForgotPassword(args) => forgot_password(args, ctx, flags).await,
        AuthCommands::ResetPassword(args) => reset_password(args, ctx, flags).await,
    }
}

/// Session snapshot shaped for output.
#[derive(Serialize)]
struct SessionView {
    authenticated: bool,
    user: Option<String>,
    shop: Option<String>,
    active_shop_id: Option<String>,
    error: Option<String>,
}

fn session_view(state: SessionState, active_shop_id: Option<String>) -> SessionView {
    SessionView {
        authenticated: state.is_authenticated,
        user: state.user.map(|user| user.email),
        shop: state.shop.map(|shop| shop.name),
        active_shop_id,
        error: state.error,
    }
}

async fn login(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session
        .login(&LoginRequest {
            email: args.email.clone(),
            password: args.password.clone(),
        })
        .await?;

    output(
        &session_view(ctx.session.state(), ctx.tenant.shop_id_or_default()),
        flags.format,
    )
}

#[derive(Serialize)]
struct RegisterResponse {
    registered: bool,
    shop: Option<String>,
    note: &'static str,
}

async fn register(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session
        .register(&RegisterRequest {
            email: args.email.clone(),
            password: args.password.clone(),
            first_name: args.first_name.clone(),
            last_name: args.last_name.clone(),
            phone: args.phone.clone(),
            shop_name: args.shop_name.clone(),
        })
        .await?;

    let state = ctx.session.state();
    output(
        &RegisterResponse {
            registered: true,
            shop: state.shop.map(|shop| shop.name),
            note: "run `shd auth login` to sign in",
        },
        flags.format,
    )
}

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
}

async fn logout(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.logout().await?;
    output(&LogoutResponse { logged_out: true }, flags.format)
}

fn status(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &session_view(ctx.session.state(), ctx.tenant.shop_id_or_default()),
        flags.format,
    )
}

#[derive(Serialize)]
struct AckResponse {
    ok: bool,
}

async fn forgot_password(
    args: &AuthForgotPasswordArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session
        .forgot_password(&ForgotPasswordRequest {
            email: args.email.clone(),
        })
        .await?;
    output(&AckResponse { ok: true }, flags.format)
}

async fn reset_password(
    args: &AuthResetPasswordArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session
        .reset_password(&ResetPasswordRequest {
            token: args.token.clone(),
            password: args.password.clone(),
        })
        .await?;
    output(&AckResponse { ok: true }, flags.format)
}
