use serde::Deserialize;

/// Config はアプリケーション全体の設定。
/// 設定ファイルが無くても全フィールドが既定値で埋まる。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub balance: BalanceConfig,
}

impl Config {
    /// CONFIG_PATH（既定: config/config.yaml）から設定を読み込む。
    /// ファイルが存在しない場合は既定値を使い、PORT 環境変数があればポートを上書きする。
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/config.yaml".to_string());
        let mut cfg: Config = match std::fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content)?,
            Err(_) => Config::default(),
        };
        if let Ok(port) = std::env::var("PORT") {
            cfg.server.port = port.parse()?;
        }
        Ok(cfg)
    }
}

/// AppConfig はアプリケーション設定。
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
        }
    }
}

fn default_name() -> String {
    "balance-api".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// ServerConfig はサーバー設定。
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    10000
}

/// BalanceConfig は /balance が返す固定残高の設定。
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceConfig {
    #[serde(default = "default_amount")]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            amount: default_amount(),
            currency: default_currency(),
        }
    }
}

fn default_amount() -> f64 {
    123.45
}

fn default_currency() -> String {
    "USD".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
app:
  name: "balance-api"
  version: "0.1.0"
server:
  host: "0.0.0.0"
  port: 10000
balance:
  amount: 123.45
  currency: "USD"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.app.name, "balance-api");
        assert_eq!(config.server.port, 10000);
        assert_eq!(config.balance.amount, 123.45);
        assert_eq!(config.balance.currency, "USD");
    }

    #[test]
    fn test_config_defaults() {
        let yaml = "app: {}\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.app.name, "balance-api");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 10000);
        assert_eq!(config.balance.amount, 123.45);
        assert_eq!(config.balance.currency, "USD");
    }

    #[test]
    fn test_load_without_file_applies_port_env() {
        // CONFIG_PATH を存在しないファイルに向け、PORT で上書きされることを確認する。
        std::env::set_var("CONFIG_PATH", "does/not/exist.yaml");
        std::env::set_var("PORT", "18080");
        let config = Config::load().unwrap();
        assert_eq!(config.server.port, 18080);
        std::env::remove_var("CONFIG_PATH");
        std::env::remove_var("PORT");
    }
}
