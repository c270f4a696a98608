use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Host of the shop API, without trailing slash
    pub base_url: String,
    /// Personal path segment of the shop
    pub api_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AdminConfig {
    /// Token sent as `Authorization` on admin endpoints
    #[serde(default)]
    pub token: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://livejs-api.hexschool.io"
api_path = "storefront"

[admin]
token = ""
"#;

const API_PREFIX: &str = "/api/livejs/v1";

/// Load configuration
///
/// Starts from the embedded default and applies the build-time
/// `STOREFRONT_API_BASE_URL`, `STOREFRONT_API_PATH` and
/// `STOREFRONT_ADMIN_TOKEN` variables when they were set.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;
    config.apply_overrides(
        option_env!("STOREFRONT_API_BASE_URL"),
        option_env!("STOREFRONT_API_PATH"),
        option_env!("STOREFRONT_ADMIN_TOKEN"),
    );
    config.validate()?;
    log::info!(
        "Using shop API {} (path: {})",
        config.api.base_url,
        config.api.api_path
    );
    Ok(config)
}

impl Config {
    fn apply_overrides(
        &mut self,
        base_url: Option<&str>,
        api_path: Option<&str>,
        token: Option<&str>,
    ) {
        if let Some(v) = base_url.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = v.trim().to_string();
        }
        if let Some(v) = api_path.filter(|v| !v.trim().is_empty()) {
            self.api.api_path = v.trim().to_string();
        }
        if let Some(v) = token.filter(|v| !v.trim().is_empty()) {
            self.admin.token = v.trim().to_string();
        }
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
        self.api.api_path = self.api.api_path.trim_matches('/').to_string();
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.api.base_url.is_empty() {
            anyhow::bail!("api.base_url is empty");
        }
        if self.api.api_path.is_empty() {
            anyhow::bail!("api.api_path is empty");
        }
        Ok(())
    }

    /// `{base}/api/livejs/v1/customer/{path}/{resource}`
    pub fn customer_url(&self, resource: &str) -> String {
        format!(
            "{}{}/customer/{}/{}",
            self.api.base_url,
            API_PREFIX,
            self.api.api_path,
            resource.trim_start_matches('/')
        )
    }

    /// `{base}/api/livejs/v1/admin/{path}/{resource}`
    pub fn admin_url(&self, resource: &str) -> String {
        format!(
            "{}{}/admin/{}/{}",
            self.api.base_url,
            API_PREFIX,
            self.api.api_path,
            resource.trim_start_matches('/')
        )
    }
}

/// A token saved in the browser wins over the configured one
pub fn resolve_admin_token(stored: Option<String>, configured: &str) -> Option<String> {
    stored
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| {
            let configured = configured.trim();
            (!configured.is_empty()).then(|| configured.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> Config {
        toml::from_str(DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.api.base_url, "https://livejs-api.hexschool.io");
        assert_eq!(config.api.api_path, "storefront");
        assert!(config.admin.token.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_urls() {
        let config = default_config();
        assert_eq!(
            config.customer_url("carts"),
            "https://livejs-api.hexschool.io/api/livejs/v1/customer/storefront/carts"
        );
        assert_eq!(
            config.admin_url("/orders/abc"),
            "https://livejs-api.hexschool.io/api/livejs/v1/admin/storefront/orders/abc"
        );
    }

    #[test]
    fn test_overrides_are_normalized() {
        let mut config = default_config();
        config.apply_overrides(Some("http://localhost:3000/"), Some("/myshop/"), Some(" tok "));
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.api_path, "myshop");
        assert_eq!(config.admin.token, "tok");
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let mut config = default_config();
        config.apply_overrides(Some(""), Some("  "), None);
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let mut config = default_config();
        config.api.api_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_admin_token() {
        assert_eq!(resolve_admin_token(Some("a".into()), "b"), Some("a".into()));
        assert_eq!(resolve_admin_token(Some("  ".into()), "b"), Some("b".into()));
        assert_eq!(resolve_admin_token(None, ""), None);
    }
}
