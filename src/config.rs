// src/config.rs
use crate::domain::errors::{AppError, AppResult};
use crate::domain::models::Platform;
use crate::domain::schedule::FeeSchedule;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Fee schedule source
    pub schedule: ScheduleConfig,

    /// Platforms the registry accepts
    pub platforms: Vec<Platform>,

    /// Request file read by the CLI
    pub input_path: Option<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Fee schedule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// JSON fee schedule; the built-in policy is used when absent
    pub path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,

    /// Log to file
    pub to_file: bool,

    /// Log file path
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let platforms = match env::var("ENABLED_PLATFORMS") {
            Ok(value) => parse_platforms(&value)?,
            Err(_) => Platform::ALL.to_vec(),
        };

        let logging_config = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            to_file: env::var("LOG_TO_FILE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            file_path: env::var("LOG_FILE_PATH").ok(),
        };

        Ok(Config {
            schedule: ScheduleConfig {
                path: env::var("FEE_SCHEDULE_PATH").ok(),
            },
            platforms,
            input_path: env::var("INPUT_PATH").ok(),
            logging: logging_config,
        })
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut file = File::open(path).map_err(|e| {
            AppError::Config(format!("Failed to open config file: {}", e))
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            AppError::Config(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::Config(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, contents).map_err(|e| {
            AppError::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the fee schedule this configuration points at
    pub fn load_schedule(&self) -> AppResult<FeeSchedule> {
        match &self.schedule.path {
            Some(path) => FeeSchedule::load(path),
            None => {
                let schedule = FeeSchedule::default();
                log::info!("Using built-in fee schedule {}", schedule.version);
                Ok(schedule)
            }
        }
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> AppResult<()> {
        let mut builder = env_logger::Builder::new();

        // Set log level
        let log_level = match self.logging.level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        };

        builder.filter_level(log_level);

        // Configure output
        if self.logging.to_file {
            if let Some(file_path) = &self.logging.file_path {
                let file = File::create(file_path).map_err(|e| {
                    AppError::Config(format!("Failed to create log file: {}", e))
                })?;

                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
        } else {
            // Keep stdout for results
            builder.target(env_logger::Target::Stderr);
        }

        builder.try_init().map_err(|e| {
            AppError::Config(format!("Failed to initialize logger: {}", e))
        })?;

        Ok(())
    }
}

/// Parse a comma-separated platform list such as "shopee,tiktok"
fn parse_platforms(value: &str) -> AppResult<Vec<Platform>> {
    let mut platforms = Vec::new();
    for tag in value.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
        let platform: Platform = tag.parse()?;
        if !platforms.contains(&platform) {
            platforms.push(platform);
        }
    }

    if platforms.is_empty() {
        return Err(AppError::Config(
            "ENABLED_PLATFORMS must name at least one platform".to_string(),
        ));
    }
    Ok(platforms)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig { path: None },
            platforms: Platform::ALL.to_vec(),
            input_path: None,
            logging: LoggingConfig {
                level: "info".to_string(),
                to_file: false,
                file_path: None,
            },
        }
    }
}
