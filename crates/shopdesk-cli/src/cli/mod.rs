use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `shd` binary.
#[derive(Debug, Parser)]
#[command(name = "shd", version, about = "Shopdesk - shop management from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Profile directory (defaults to ~/.shopdesk)
    #[arg(long, global = true)]
    pub profile_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            profile_dir: self.profile_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::shop::ShopCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["shd", "--format", "table", "--verbose", "shop", "current"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Shop {
                action: ShopCommands::Current
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["shd", "shop", "current", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["shd", "--format", "xml", "shop", "current"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "table", "raw"] {
            Cli::try_parse_from(["shd", "--format", value, "shop", "current"])
                .expect("cli should parse");
        }
    }

    #[test]
    fn profile_dir_flag_reaches_global_flags() {
        let cli = Cli::try_parse_from(["shd", "--profile-dir", "/tmp/profile", "shop", "current"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.profile_dir.as_deref(), Some("/tmp/profile"));
    }

    #[test]
    fn shop_switch_takes_a_positional_id() {
        let cli =
            Cli::try_parse_from(["shd", "shop", "switch", "9"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Shop {
                action: ShopCommands::Switch(ref args)
            } if args.id == "9"
        ));
    }

    #[test]
    fn auth_login_requires_email_and_password() {
        let parsed = Cli::try_parse_from(["shd", "auth", "login", "--email", "a@b.com"]);
        assert!(parsed.is_err());

        Cli::try_parse_from([
            "shd", "auth", "login", "--email", "a@b.com", "--password", "pw",
        ])
        .expect("cli should parse");
    }
}
