// src/application/dto/parser.rs
// Parsers for calculator requests

use super::CalculatorRequest;
use crate::domain::errors::AppResult;
use crate::domain::models::PlatformInput;

/// Parse a JSON request body
pub fn parse_request(message: &str) -> AppResult<CalculatorRequest> {
    Ok(serde_json::from_str(message)?)
}

/// Parse a JSON request body straight into a platform input
pub fn parse_input(message: &str) -> AppResult<PlatformInput> {
    Ok(parse_request(message)?.into_input()?)
}
