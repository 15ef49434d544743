use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// More than one preference shares a customer id while the run rejects duplicates.
    #[error(
        "Preference lookup for customer {customer_id} is ambiguous: \
         {count} preferences share this id"
    )]
    PreferenceLookupAmbiguous { customer_id: i64, count: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
