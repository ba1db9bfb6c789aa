// Fehler-Typ des Workers
//
// Kapselt die Core-Fehler und ergänzt Thread-Lebenszyklus-Fehler.

use encoder_core::{ConfigError, EncoderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error(transparent)]
    Encoder(#[from] EncoderError),

    #[error("worker already started")]
    AlreadyStarted,

    #[error("worker was never started")]
    NotStarted,

    #[error("failed to spawn sampling thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("sampling thread panicked")]
    Panicked,
}

impl From<ConfigError> for WorkerError {
    fn from(error: ConfigError) -> Self {
        WorkerError::Encoder(EncoderError::Config(error))
    }
}

impl WorkerError {
    /// Der Core-Fehler, falls es einer ist
    pub fn encoder_error(&self) -> Option<EncoderError> {
        match self {
            WorkerError::Encoder(e) => Some(*e),
            _ => None,
        }
    }
}
