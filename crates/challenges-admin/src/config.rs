use anyhow::anyhow;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};
use time::{format_description::well_known::Iso8601, OffsetDateTime};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Settings {
    pub level: Option<String>,
    #[serde(default)]
    pub api_settings: APISettings,
    #[serde(default)]
    pub session_settings: SessionSettings,
}

impl ConfigurableSettings for Settings {
    fn apply_cli_overrides(&mut self, cli_settings: &CliSettings) {
        if let Some(level) = &cli_settings.level {
            self.level = Some(level.clone());
        }
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("./config/local.toml")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct APISettings {
    /// Root of the challenges backend, may carry a path. `v1/...` is joined onto it per request
    pub base_url: String,
    /// Per request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for APISettings {
    fn default() -> Self {
        APISettings {
            base_url: String::from("http://127.0.0.1:8080"),
            timeout_secs: 30,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Folder holding the persisted bearer token
    pub data_folder: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            data_folder: String::from("./data"),
        }
    }
}

pub struct CliSettings {
    pub config: Option<String>,
    pub level: Option<String>,
}

pub trait ConfigurableSettings: Serialize + for<'de> Deserialize<'de> + Default {
    /// Apply CLI settings after loading from file
    fn apply_cli_overrides(&mut self, cli_settings: &CliSettings);

    /// Get the default config file path
    fn default_config_path() -> PathBuf {
        PathBuf::from("./config/settings.toml")
    }
}

pub fn get_settings_with_cli<T: ConfigurableSettings>(
    cli_settings: CliSettings,
) -> Result<T, anyhow::Error> {
    let mut settings: T = if let Some(config_path) = cli_settings.config.clone() {
        let path = PathBuf::from(config_path);

        let absolute_path = if path.is_absolute() {
            path
        } else {
            env::current_dir()?.join(path)
        };

        read_settings(&absolute_path)?
    } else {
        let default_path = T::default_config_path();
        if default_path.exists() {
            read_settings(&default_path)?
        } else {
            write_default_settings(&default_path)?
        }
    };

    settings.apply_cli_overrides(&cli_settings);

    Ok(settings)
}

fn read_settings<T: ConfigurableSettings>(path: &Path) -> Result<T, anyhow::Error> {
    let mut file = File::open(path).map_err(|e| anyhow!("Failed to find file: {}", e))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| anyhow!("Failed to read config: {}", e))?;
    toml::from_str(&content).map_err(|e| anyhow!("Failed to map config to settings: {}", e))
}

fn write_default_settings<T: ConfigurableSettings>(path: &Path) -> Result<T, anyhow::Error> {
    let default_settings = T::default();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create config directory: {}", e))?;
    }

    let toml_content = toml::to_string(&default_settings)
        .map_err(|e| anyhow!("Failed to serialize default settings: {}", e))?;

    let mut file =
        File::create(path).map_err(|e| anyhow!("Failed to create config file: {}", e))?;
    file.write_all(toml_content.as_bytes())
        .map_err(|e| anyhow!("Failed to write default config: {}", e))?;

    Ok(default_settings)
}

pub fn setup_logger(
    level: Option<String>,
    filter_targets: Vec<String>,
) -> Result<(), fern::InitError> {
    let rust_log = get_log_level(level);
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let timestamp = OffsetDateTime::now_utc()
                .format(&Iso8601::DEFAULT)
                .unwrap_or_default();
            out.finish(format_args!(
                "[{} {}] {}: {}",
                timestamp,
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .level(rust_log)
        .filter(move |metadata| {
            !filter_targets
                .iter()
                .any(|filter| metadata.target().starts_with(filter))
        })
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

pub fn get_log_level(level: Option<String>) -> LevelFilter {
    let level = level.unwrap_or_else(|| env::var("RUST_LOG").unwrap_or_default());
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}
