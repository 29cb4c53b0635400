use common::config::AdminConfig;

/// Defaults, overridden by `BRAND_ADMIN_API_URL` and `BRAND_ADMIN_LOG` when
/// they are set at build time.
pub fn load() -> AdminConfig {
    AdminConfig::default().with_overrides(
        option_env!("BRAND_ADMIN_API_URL"),
        option_env!("BRAND_ADMIN_LOG"),
    )
}
