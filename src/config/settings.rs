use crate::config::toml_config::TomlConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:2105";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = concat!("postfix-forwards/", env!("CARGO_PKG_VERSION"));

/// 合併命令列、配置檔與預設值後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    /// 命令列 > 配置檔 > 預設值
    pub fn resolve(
        file: Option<&TomlConfig>,
        endpoint: Option<&str>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        let defaults = Self::default();
        let server = file.map(|f| &f.server);

        Self {
            endpoint: endpoint
                .map(str::to_string)
                .or_else(|| server.and_then(|s| s.endpoint.clone()))
                .unwrap_or(defaults.endpoint),
            timeout_seconds: timeout_seconds
                .or_else(|| server.and_then(|s| s.timeout_seconds))
                .unwrap_or(defaults.timeout_seconds),
            user_agent: server
                .and_then(|s| s.user_agent.clone())
                .unwrap_or(defaults.user_agent),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &crate::config::CliConfig) -> Result<Self> {
        let file = TomlConfig::discover(cli.config.as_deref())?;
        if let Some(file) = &file {
            file.validate()?;
        }
        Ok(Self::resolve(
            file.as_ref(),
            cli.endpoint.as_deref(),
            cli.timeout_seconds,
        ))
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config() -> TomlConfig {
        TomlConfig::from_toml_str(
            r#"
[server]
endpoint = "http://file.example:2105"
timeout_seconds = 40
user_agent = "ops-console"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_without_file_or_flags() {
        let settings = Settings::resolve(None, None, None);
        assert_eq!(settings, Settings::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let settings = Settings::resolve(Some(&file_config()), None, None);
        assert_eq!(settings.endpoint, "http://file.example:2105");
        assert_eq!(settings.timeout_seconds, 40);
        assert_eq!(settings.user_agent, "ops-console");
    }

    #[test]
    fn test_flags_override_file() {
        let settings = Settings::resolve(
            Some(&file_config()),
            Some("https://cli.example"),
            Some(5),
        );
        assert_eq!(settings.endpoint, "https://cli.example");
        assert_eq!(settings.timeout_seconds, 5);
        assert_eq!(settings.user_agent, "ops-console");
    }

    #[test]
    fn test_invalid_flag_value_fails_validation() {
        let settings = Settings::resolve(None, Some("not a url"), None);
        assert!(settings.validate().is_err());
    }
}
