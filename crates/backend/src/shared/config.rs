use contracts::shared::menu_tree::ActiveContext;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub menu: MenuSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Sidebar menu settings
#[derive(Debug, Deserialize, Clone)]
pub struct MenuSettings {
    /// Role whose assignments are used when the request names none
    pub default_role: String,
    /// Prefix for relative item routes
    #[serde(default)]
    pub module_id: String,
    #[serde(default = "default_true")]
    pub activate_items: bool,
    #[serde(default = "default_true")]
    pub activate_parents: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            default_role: "guest".to_string(),
            module_id: String::new(),
            activate_items: true,
            activate_parents: true,
        }
    }
}

impl MenuSettings {
    /// Activation context for one request
    pub fn context(&self, route: String, params: HashMap<String, String>) -> ActiveContext {
        ActiveContext {
            route,
            params,
            module_id: self.module_id.clone(),
            activate_items: self.activate_items,
            activate_parents: self.activate_parents,
        }
    }

    /// Split menu request query parameters into the role and the activation context.
    ///
    /// A missing or empty `role` falls back to `default_role`; a missing `route` is empty.
    /// Every other parameter is matched against item route parameters.
    pub fn from_query(&self, mut query: HashMap<String, String>) -> (String, ActiveContext) {
        let role = query
            .remove("role")
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| self.default_role.clone());
        let route = query.remove("route").unwrap_or_default();
        (role, self.context(route, query))
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[server]
port = 3000

[menu]
default_role = "guest"
module_id = ""
activate_items = true
activate_parents = true
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    db_path.to_path_buf()
}
