use anyhow::Context;
use shopdesk_config::ShopdeskConfig;

/// Load configuration for a CLI invocation: `.env`, then the layered
/// figment sources.
pub fn load_config() -> anyhow::Result<ShopdeskConfig> {
    ShopdeskConfig::load_with_dotenv().context("failed to load configuration")
}
