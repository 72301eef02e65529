use std::path::PathBuf;

use thiserror::Error;

use crate::{CategoryId, InstrumentId, ValueError};

/// Errors that can occur when loading a [`Table`](super::Table).
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported table format `{extension}` (expected toml or json)")]
    UnsupportedFormat { extension: String },

    #[error("invalid TOML table")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON table")]
    Json(#[from] serde_json::Error),

    #[error("instrument `{instrument}` is listed more than once")]
    DuplicateInstrument { instrument: InstrumentId },

    #[error("invalid {field} for instrument `{instrument}`")]
    InvalidValue {
        instrument: InstrumentId,
        field: &'static str,
        #[source]
        source: ValueError,
    },

    #[error("invalid spend for category `{category}`")]
    InvalidSpend {
        category: CategoryId,
        #[source]
        source: ValueError,
    },
}
