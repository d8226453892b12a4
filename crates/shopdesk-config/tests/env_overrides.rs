use figment::Jail;
use shopdesk_config::ShopdeskConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("SHOPDESK_API__BASE_URL", "https://api.example.com/v1");
        jail.set_env("SHOPDESK_API__TIMEOUT_SECS", "30");

        let config = ShopdeskConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://api.example.com/v1");
        assert_eq!(config.api.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn env_var_sets_default_shop_id() {
    Jail::expect_with(|jail| {
        jail.set_env("SHOPDESK_TENANT__DEFAULT_SHOP_ID", "42");

        let config = ShopdeskConfig::load().expect("config loads");
        assert_eq!(config.tenant.default_shop_id.as_deref(), Some("42"));
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".shopdesk")?;
        jail.create_file(
            ".shopdesk/config.toml",
            r#"
            [api]
            base_url = "https://from-toml.example.com"
            "#,
        )?;
        jail.set_env("SHOPDESK_API__BASE_URL", "https://from-env.example.com");

        let config = ShopdeskConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://from-env.example.com");
        Ok(())
    });
}
