//! System description files
//!
//! A system can be stored as JSON or TOML:
//!
//! ```json
//! {
//!   "coefficients": [[2, 1, -1], [-3, -1, 2], [-2, 1, 2]],
//!   "rhs": [8, -11, -3],
//!   "solver": { "pivot_tolerance": 1e-12 },
//!   "precision": 4
//! }
//! ```
//!
//! The format is detected from the file extension.

use crate::direct::GaussConfig;
use crate::error::SolverError;
use crate::report::DEFAULT_PRECISION;
use crate::system::LinearSystem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk description of a linear system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemFile {
    /// Coefficient rows, one per equation
    pub coefficients: Vec<Vec<f64>>,
    /// Independent terms, one per equation
    pub rhs: Vec<f64>,
    /// Decimals used when printing the solution
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Solver settings
    #[serde(default)]
    pub solver: GaussConfig,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl SystemFile {
    /// Describe an existing system with default settings
    pub fn from_system(system: &LinearSystem<f64>) -> Self {
        Self {
            coefficients: system.matrix().outer_iter().map(|row| row.to_vec()).collect(),
            rhs: system.rhs().to_vec(),
            precision: DEFAULT_PRECISION,
            solver: GaussConfig::default(),
        }
    }

    /// Validate and convert into a [`LinearSystem`]
    pub fn to_system(&self) -> Result<LinearSystem<f64>, SolverError> {
        LinearSystem::from_rows(self.coefficients.clone(), self.rhs.clone())
    }
}

/// Text encoding of a system file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json`, read with serde_json
    Json,
    /// `.toml`, read with the toml crate
    Toml,
}

impl ConfigFormat {
    /// Pick the encoding from a path's extension (case-insensitive);
    /// `None` for anything other than `.json` or `.toml`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Errors raised while reading or writing system files
#[derive(Debug, thiserror::Error)]
pub enum SystemFileError {
    /// The system file could not be read or written
    #[error("cannot access system file: {0}")]
    Io(#[from] std::io::Error),

    /// The text is not a well-formed system description
    #[error("malformed system file: {0}")]
    ParseError(String),

    /// The system could not be encoded
    #[error("cannot encode system: {0}")]
    SerializeError(String),

    /// The extension is neither `.json` nor `.toml`
    #[error("unsupported system file extension: {0}")]
    UnsupportedFormat(String),

    /// Well-formed, but the matrix, right-hand side or solver settings are invalid
    #[error("invalid system: {0}")]
    Invalid(#[from] SolverError),
}

/// Read and validate a system file; the encoding follows the extension.
pub fn load_system<P: AsRef<Path>>(path: P) -> Result<SystemFile, SystemFileError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| SystemFileError::UnsupportedFormat(path.display().to_string()))?;

    let content = fs::read_to_string(path)?;
    log::debug!("Loading system from {}", path.display());
    parse_system(&content, format)
}

/// Decode a system description and validate it.
///
/// Dimensions, finiteness and the pivot tolerance are all checked, so a
/// returned [`SystemFile`] always converts into a [`LinearSystem`] and can be
/// solved with its own `solver` settings.
pub fn parse_system(content: &str, format: ConfigFormat) -> Result<SystemFile, SystemFileError> {
    let file: SystemFile = match format {
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| SystemFileError::ParseError(e.to_string()))?
        }
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| SystemFileError::ParseError(e.to_string()))?
        }
    };
    file.to_system()?;
    file.solver.validate()?;
    Ok(file)
}

/// Write a system file, encoded according to the extension of `path`.
pub fn save_system<P: AsRef<Path>>(file: &SystemFile, path: P) -> Result<(), SystemFileError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| SystemFileError::UnsupportedFormat(path.display().to_string()))?;

    let content = serialize_system(file, format)?;
    fs::write(path, content)?;
    Ok(())
}

/// Encode a system description as pretty-printed JSON or TOML.
pub fn serialize_system(
    file: &SystemFile,
    format: ConfigFormat,
) -> Result<String, SystemFileError> {
    match format {
        ConfigFormat::Json => serde_json::to_string_pretty(file)
            .map_err(|e| SystemFileError::SerializeError(e.to_string())),
        ConfigFormat::Toml => {
            toml::to_string_pretty(file).map_err(|e| SystemFileError::SerializeError(e.to_string()))
        }
    }
}
