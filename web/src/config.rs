// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use superlists_core::{APP_NAME, Config as CoreConfig};
use tokio::fs;

use crate::server::ServerConfig;

const SUPERLISTS_CONFIG_ENV: &str = "SUPERLISTS_CONFIG";

/// Configuration for the Superlists application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Loads the configuration.
///
/// An explicit `path`, then `$SUPERLISTS_CONFIG`, then the per-user config
/// directory are tried in order. Only a missing file at the per-user location
/// falls back to the defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(SUPERLISTS_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::info!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e).into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(dir: &TempDir, name: &str, state_dir: &str, bind: &str) -> PathBuf {
        let path = dir.path().join(name);
        let content = format!(
            r#"
[core]
state_dir = "{state_dir}"

[server]
bind = "{bind}"
"#
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_full_config() {
        let config: Config = r#"
[core]
state_dir = "/var/lib/superlists"

[server]
bind = "0.0.0.0:9000"
"#
        .parse()
        .unwrap();

        assert_eq!(
            config.core.state_dir,
            Some(PathBuf::from("/var/lib/superlists"))
        );
        assert_eq!(config.server.bind, "0.0.0.0:9000".parse().unwrap());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.core.state_dir, None);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn rejects_invalid_bind_address() {
        let result = "[server]\nbind = \"not an address\"".parse::<Config>();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let cli_path = write_config(&temp_dir, "cli.toml", "/cli/state", "127.0.0.1:8001");
        let env_path = write_config(&temp_dir, "env.toml", "/env/state", "127.0.0.1:8002");

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(SUPERLISTS_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(Some(cli_path)).await.unwrap();

            assert_eq!(config.core.state_dir, Some(PathBuf::from("/cli/state")));
            assert_eq!(config.server.bind, "127.0.0.1:8001".parse().unwrap());

            unsafe {
                std::env::remove_var(SUPERLISTS_CONFIG_ENV);
            }
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = write_config(&temp_dir, "env.toml", "/env/state", "127.0.0.1:8002");

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(SUPERLISTS_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(None).await.unwrap();

            assert_eq!(config.core.state_dir, Some(PathBuf::from("/env/state")));

            unsafe {
                std::env::remove_var(SUPERLISTS_CONFIG_ENV);
            }
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn uses_default_location_when_no_cli_or_env() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(APP_NAME)).unwrap();
        write_config(
            &temp_dir,
            &format!("{APP_NAME}/config.toml"),
            "/default/state",
            "127.0.0.1:8003",
        );

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(SUPERLISTS_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
            }

            let config = parse_config(None).await.unwrap();

            assert_eq!(
                config.core.state_dir,
                Some(PathBuf::from("/default/state"))
            );

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn falls_back_to_defaults_when_nothing_found() {
        let temp_dir = TempDir::new().unwrap();

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(SUPERLISTS_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
            }

            let config = parse_config(None).await.unwrap();

            assert_eq!(config.core.state_dir, None);
            assert_eq!(config.server, ServerConfig::default());

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[tokio::test]
    async fn explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        let result = parse_config(Some(missing)).await;

        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("Failed to read config file"));
    }
}
