//! Rotate-mode configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::GeoEditError;

pub const DEFAULT_ROTATE_CURSOR: &str = "crosshair";
pub const DEFAULT_HANDLE_DIVISOR: f64 = 1000.0;

pub const ROTATE_CURSOR_ENV: &str = "GEOEDIT_ROTATE_CURSOR";
pub const HANDLE_DIVISOR_ENV: &str = "GEOEDIT_HANDLE_DIVISOR";

#[derive(Debug, Clone, PartialEq)]
pub struct RotateModeConfig {
    /// Cursor requested while the pointer is over the rotate handle.
    pub rotate_cursor: String,
    /// The rotate line is the longest bounding-box edge divided by this.
    pub handle_divisor: f64,
}

impl Default for RotateModeConfig {
    fn default() -> Self {
        Self { rotate_cursor: DEFAULT_ROTATE_CURSOR.to_string(), handle_divisor: DEFAULT_HANDLE_DIVISOR }
    }
}

impl RotateModeConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `GEOEDIT_ROTATE_CURSOR`: default `crosshair`
    /// - `GEOEDIT_HANDLE_DIVISOR`: positive number, default 1000
    pub fn from_env() -> Result<Self, GeoEditError> {
        let rotate_cursor = match std::env::var(ROTATE_CURSOR_ENV) {
            Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => DEFAULT_ROTATE_CURSOR.to_string(),
        };
        let handle_divisor = match std::env::var(HANDLE_DIVISOR_ENV) {
            Ok(raw) => parse_handle_divisor(&raw)?,
            Err(_) => DEFAULT_HANDLE_DIVISOR,
        };
        Ok(Self { rotate_cursor, handle_divisor })
    }
}

/// Parse a rotate-line divisor; it must be finite and strictly positive.
pub fn parse_handle_divisor(raw: &str) -> Result<f64, GeoEditError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GeoEditError::ConfigParse(format!("{HANDLE_DIVISOR_ENV} is not a number: {raw}")))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(GeoEditError::ConfigParse(format!("{HANDLE_DIVISOR_ENV} must be positive: {raw}")));
    }
    Ok(value)
}
