use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Create an account (and optionally its first shop).
    Register(AuthRegisterArgs),
    /// Invalidate the session and clear stored credentials.
    Logout,
    /// Show current session status.
    Status,
    /// Request a password-reset email.
    #[command(name = "forgot-password")]
    ForgotPassword(AuthForgotPasswordArgs),
    /// Complete a password reset with the emailed token.
    #[command(name = "reset-password")]
    ResetPassword(AuthResetPasswordArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub phone: Option<String>,
    /// Name for the shop created alongside the account.
    #[arg(long)]
    pub shop_name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthForgotPasswordArgs {
    #[arg(long)]
    pub email: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthResetPasswordArgs {
    /// Reset token from the password-reset email.
    #[arg(long)]
    pub token: String,
    #[arg(long)]
    pub password: String,
}
