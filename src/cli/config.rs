use std::env;

use clap::ValueEnum;
use thiserror::Error;

use crate::cli::output::OutputFormat;

pub const LOG_LEVEL_VAR: &str = "BERLIN_CLOCK_LOG_LEVEL";
pub const FORMAT_VAR: &str = "BERLIN_CLOCK_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError
{
    #[error("Valor inválido para {key}: {value} (use text, pretty ou json)")]
    InvalidFormat
    {
        key: &'static str,
        value: String,
    },
}

/// Configuração carregada do ambiente (.env incluído). Flags da linha de comando têm prioridade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig
{
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for AppConfig
{
    fn default() -> Self
    {
        AppConfig { log_level: "info".to_string(), format: OutputFormat::Text }
    }
}

impl AppConfig
{
    pub fn from_env() -> Result<Self, ConfigError>
    {
        dotenv::dotenv().ok();
        Self::from_vars(env::var(LOG_LEVEL_VAR).ok(), env::var(FORMAT_VAR).ok())
    }

    fn from_vars(log_level: Option<String>, format: Option<String>) -> Result<Self, ConfigError>
    {
        let mut config = AppConfig::default();

        if let Some(level) = log_level.as_deref().and_then(normalize_level)
        {
            config.log_level = level;
        }

        if let Some(raw) = format
        {
            config.format = OutputFormat::from_str(raw.trim(), true)
                .map_err(|_| ConfigError::InvalidFormat { key: FORMAT_VAR, value: raw.clone() })?;
        }

        Ok(config)
    }

    /// Aplica as flags da linha de comando por cima do ambiente.
    pub fn with_overrides(mut self, log_level: Option<String>, format: Option<OutputFormat>) -> Self
    {
        if let Some(level) = log_level.as_deref().and_then(normalize_level)
        {
            self.log_level = level;
        }
        if let Some(format) = format
        {
            self.format = format;
        }
        self
    }
}

// Mesmo tratamento para o ambiente e para a linha de comando; vazio conta como ausente.
fn normalize_level(raw: &str) -> Option<String>
{
    let level = raw.trim();
    if level.is_empty()
    {
        None
    }
    else
    {
        Some(level.to_ascii_lowercase())
    }
}
