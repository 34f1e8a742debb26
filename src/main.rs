// src/main.rs
use shop_profit::application::dto::{parse_input, validate};
use shop_profit::config::Config;
use shop_profit::domain::errors::{AppError, AppResult};
use shop_profit::CalculatorRegistry;

use std::io::Read;
use std::sync::Arc;

fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting shop_profit v{}", env!("CARGO_PKG_VERSION"));

    let schedule = Arc::new(config.load_schedule()?);
    let registry = CalculatorRegistry::with_platforms(schedule, &config.platforms);

    let request = read_request(&config)?;
    let input = parse_input(&request)?;
    validate(&input, &registry.schedule().limits)?;

    let result = registry.calculate(&input)?;
    log::info!("{}: {}", input.platform(), result);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Request body from the first argument, INPUT_PATH, or stdin
fn read_request(config: &Config) -> AppResult<String> {
    let path = std::env::args().nth(1).or_else(|| config.input_path.clone());

    match path {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("Failed to read request {}: {}", path, e))),
        None => {
            log::debug!("Reading request from stdin");
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}
