//! Error types for querykit

use thiserror::Error;

/// Result type alias for querykit operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while configuring or rendering a statement.
///
/// Mutators never fail; only construction, parsing helpers and rendering
/// return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// `build`/`to_sql` was called before `select`/`insert`/`update`/`delete`.
    #[error("No statement kind selected for table '{0}'")]
    NoStatementKind(String),

    /// The builder was constructed with an empty table name.
    #[error("Table name cannot be empty")]
    EmptyTable,

    /// An ORDER BY direction string was neither `ASC` nor `DESC`.
    #[error("Invalid order direction: '{0}'. Expected: ASC or DESC")]
    InvalidDirection(String),

    /// A JSON value has no scalar binding representation.
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),
}

impl QueryError {
    /// Create an unsupported value error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedValue(message.into())
    }

    /// Check if this is a missing statement kind error
    pub fn is_no_statement_kind(&self) -> bool {
        matches!(self, Self::NoStatementKind(_))
    }
}
