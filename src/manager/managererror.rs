use serde::Deserialize;
use thiserror::Error;

use crate::math::dataset::dataset::DataSetError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("key '{0}' defined more than once")]
    DuplicateNameError(String),

    #[error("invalid definition for '{name}': {source}")]
    DataSetError {
        name: String,
        #[source]
        source: DataSetError
    },
}

impl ManagerError {
    pub fn data_set(name: &str, source: DataSetError) -> ManagerError {
        ManagerError::DataSetError {
            name: name.to_owned(),
            source
        }
    }
}

/// Deserializes one JSON value, wrapping serde's failure as a [`ManagerError`].
pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
where
    T: for<'a> Deserialize<'a>,
{
    serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
}
