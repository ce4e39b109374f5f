use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Human-readable detail without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            ModelError::Validation(msg) | ModelError::Db(msg) => msg,
        }
    }
}
