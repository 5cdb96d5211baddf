use std::{env, io::ErrorKind, path::PathBuf};

use fractic_server_error::ServerError;

use crate::errors::{InvalidConfig, InvalidRon, ReadError};

pub const CONFIG_PATH_ENV: &str = "RECIBOS_CONFIG";
pub const BIND_ADDR_ENV: &str = "RECIBOS_BIND";
pub const DATA_FILE_ENV: &str = "RECIBOS_DATA_FILE";

const DEFAULT_CONFIG_PATH: &str = "recibos.ron";

/// Application configuration, read from a RON file.
///
/// Every field is optional in the file; missing ones fall back to the
/// defaults below. Example:
///
/// ```ron
/// (
///     bind_addr: "0.0.0.0:8080",
///     data_file: "data/recibos.json",
///     numero_prefix: "SANGL-2025",
///     card: (width: 40),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
#[serde(default)]
pub struct RecibosConfig {
    pub bind_addr: String,
    pub data_file: PathBuf,
    pub numero_prefix: String,
    pub card: CardConfig,
}

/// Layout of the printable card. `lines` may contain `{{key}}` placeholders
/// naming any receipt field by its JSON key.
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub title: String,
    pub lines: Vec<String>,
    pub footer: Vec<String>,
    pub width: usize,
}

impl Default for RecibosConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            data_file: PathBuf::from("data/recibos.json"),
            numero_prefix: "SANGL-2024".to_string(),
            card: CardConfig::default(),
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: "Copa Esfordag".to_string(),
            lines: vec![
                "Fecha: {{fecha}}".to_string(),
                "Recibo N.°: {{numero}}".to_string(),
                "Recibí de: {{recibidoDe}}".to_string(),
                "La suma de: {{suma}}".to_string(),
                "Forma de pago: {{formaPago}}".to_string(),
                "Por el concepto de: {{concepto}}".to_string(),
                "Correspondiente a: Participación 7mo Torneo Copa Esfordag".to_string(),
                "Saldo: {{saldo}}".to_string(),
            ],
            footer: vec![
                "CONTACTO: 3012096623".to_string(),
                "albeiro17@hotmail.com".to_string(),
            ],
            width: 48,
        }
    }
}

impl RecibosConfig {
    /// Reads the file named by `RECIBOS_CONFIG` (or `recibos.ron`), then
    /// applies environment overrides.
    pub fn load() -> Result<Self, ServerError> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let config = Self::from_file(path)?;
        config.with_overrides(|key| env::var(key).ok())
    }

    /// A missing file yields the defaults.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ServerError> {
        let path = path.into();
        match std::fs::read_to_string(&path) {
            Ok(raw) => Self::from_ron_str(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ReadError::with_debug(&e)),
        }
    }

    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("RecibosConfig", &e))
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind_addr) = lookup(BIND_ADDR_ENV) {
            self.bind_addr = bind_addr;
        }
        if let Some(data_file) = lookup(DATA_FILE_ENV) {
            self.data_file = PathBuf::from(data_file);
        }
        if self.card.width == 0 {
            return Err(InvalidConfig::new("card width must be positive"));
        }
        Ok(self)
    }
}
