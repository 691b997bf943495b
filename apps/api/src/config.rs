use anyhow::{Context, Result};

use crate::layout::options::DEFAULT_PADDING;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Inset applied to every emitted rectangle.
    pub layout_padding: f64,
    /// Largest accepted canvas side, in canvas units.
    pub max_canvas_side: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            layout_padding: parse_env("LAYOUT_PADDING", DEFAULT_PADDING)?,
            max_canvas_side: parse_env("MAX_CANVAS_SIDE", 20_000.0)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            layout_padding: DEFAULT_PADDING,
            max_canvas_side: 20_000.0,
        }
    }
}

fn parse_env(key: &str, default: f64) -> Result<f64> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Environment variable '{key}' must be a number, got '{raw}'"))?;
    anyhow::ensure!(
        value.is_finite() && value >= 0.0,
        "Environment variable '{key}' must be a non-negative number, got {value}"
    );
    Ok(value)
}
