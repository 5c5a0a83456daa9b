use crate::{database::db::DbError, model::config::ConfigError};
use thiserror::Error;

/// Failures that abort a run. Per-player problems never end up here.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    Config(#[from] ConfigError)
}
