use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatdexError {
    #[error("Record {id}: missing or malformed field `{field}`")]
    DataIntegrity { id: String, field: String },

    #[error("Duplicate record id: {0}")]
    DuplicateId(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl StatdexError {
    pub fn integrity(id: impl Into<String>, field: impl Into<String>) -> Self {
        StatdexError::DataIntegrity {
            id: id.into(),
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatdexError>;
