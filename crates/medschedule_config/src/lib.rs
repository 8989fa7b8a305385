use config::{Config, ConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
pub mod models;
pub use models::*;

/// Reference data shipped with the crate. Files and environment variables layer on top.
pub static DEFAULT_CONFIG_JSON: &str = include_str!("default_config.json");

/// Loads the application configuration.
///
/// Sources, lowest precedence first:
/// 1. the embedded [`DEFAULT_CONFIG_JSON`]
/// 2. `<config dir>/default.{toml,json,yaml,...}` (optional)
/// 3. `<config dir>/<RUN_ENV>.{toml,json,yaml,...}` (optional)
/// 4. environment variables prefixed with `PREFIX` (default `MEDSCHEDULE`), `__` separated
///
/// The config dir is `MEDSCHEDULE_CONFIG_DIR` or `./config`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "MEDSCHEDULE".to_string());
    let config_dir = env::var("MEDSCHEDULE_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    load_config_from(&config_dir, &run_env, Some(&prefix))
}

/// Loads configuration from an explicit directory and run environment.
///
/// Pass `None` as `env_prefix` to ignore the process environment entirely.
pub fn load_config_from(
    config_dir: &Path,
    run_env: &str,
    env_prefix: Option<&str>,
) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!(
        "Loading config: default_path={} env_path={}",
        default_path.display(),
        env_path.display()
    );

    let mut builder = Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG_JSON, FileFormat::Json))
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false));

    if let Some(prefix) = env_prefix {
        builder = builder.add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );
    }

    builder.build()?.try_deserialize()
}

/// Parses the embedded defaults only. Used by tests and by callers that want
/// the stock reference data without touching the filesystem.
pub fn default_config() -> Result<AppConfig, ConfigError> {
    serde_json::from_str(DEFAULT_CONFIG_JSON)
        .map_err(|err| ConfigError::Message(format!("failed to parse embedded config: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is `DOTENV_OVERRIDE` if set, otherwise `.env`. Loading happens at most
/// once per process; a missing file is not an error.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
