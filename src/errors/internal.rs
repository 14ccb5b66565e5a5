use thiserror::Error;

/// Internal error type for store and service operations
///
/// This error type is NOT exposed via API. Handlers must explicitly
/// convert these to one of the API error enums, logging the detail
/// server-side before returning a generic message.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Database transaction failed
    #[error("Transaction error: {operation} failed: {source}")]
    Transaction {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Failed to parse a value (date, flag, etc.)
    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse { value_type: String, message: String },

    /// Cryptographic operation failed (hashing, verification, etc.)
    #[error("Crypto error: {operation} failed: {message}")]
    Crypto { operation: String, message: String },
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    /// Create a transaction error with context
    pub fn transaction(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Transaction {
            operation: operation.into(),
            source,
        }
    }

    /// Create a parse error with context
    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    /// Create a crypto error with context
    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Token issuance and validation errors
///
/// Raised by the token service; every API error enum maps these onto
/// its own 401 variants so protected handlers can use `?` directly.
#[derive(Error, Debug, PartialEq)]
pub enum TokenError {
    /// Token signature or structure is invalid
    #[error("Invalid or malformed JWT")]
    Invalid,

    /// Token expiry is in the past
    #[error("JWT has expired")]
    Expired,

    /// Signing a new token failed
    #[error("Token creation failed: {0}")]
    Creation(String),
}
