//! Builder configuration.

#[cfg(feature = "tracing")]
use tracing::Level;

/// What rendering does when no statement kind has been chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingKind {
    /// Return [`QueryError::NoStatementKind`](crate::QueryError::NoStatementKind).
    #[default]
    Error,
    /// Render an empty statement with no bindings.
    Empty,
}

/// Configuration for a [`StatementBuilder`](crate::StatementBuilder).
///
/// By default rendering without a statement kind is an error and statement
/// logging is disabled.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Policy for rendering with no statement kind.
    pub missing_kind: MissingKind,
    /// Emit each rendered statement as a `tracing` event (target `querykit.sql`).
    ///
    /// Has no effect unless the `tracing` feature is enabled.
    pub log_statements: bool,
    /// Tracing event level to emit at.
    #[cfg(feature = "tracing")]
    pub log_level: Level,
    /// Truncate logged SQL (in bytes, on a char boundary). `None` means no truncation.
    pub max_log_sql_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            missing_kind: MissingKind::Error,
            log_statements: false,
            #[cfg(feature = "tracing")]
            log_level: Level::DEBUG,
            max_log_sql_length: Some(200),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing statement kind policy.
    pub fn with_missing_kind(mut self, policy: MissingKind) -> Self {
        self.missing_kind = policy;
        self
    }

    /// Enable statement logging.
    pub fn enable_logging(mut self) -> Self {
        self.log_statements = true;
        self
    }

    /// Disable statement logging.
    pub fn disable_logging(mut self) -> Self {
        self.log_statements = false;
        self
    }

    /// Override the tracing event level.
    #[cfg(feature = "tracing")]
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_log_sql_length(mut self, len: usize) -> Self {
        self.max_log_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_log_sql_length = None;
        self
    }
}

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::new();
        assert_eq!(config.missing_kind, MissingKind::Error);
        assert!(!config.log_statements);
        assert_eq!(config.max_log_sql_length, Some(200));
    }

    #[test]
    fn test_setters() {
        let config = BuilderConfig::new()
            .with_missing_kind(MissingKind::Empty)
            .enable_logging()
            .with_max_log_sql_length(16);
        assert_eq!(config.missing_kind, MissingKind::Empty);
        assert!(config.log_statements);
        assert_eq!(config.max_log_sql_length, Some(16));

        let config = config.disable_logging().no_truncate();
        assert!(!config.log_statements);
        assert_eq!(config.max_log_sql_length, None);
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        assert_eq!(truncate_sql_bytes("SELECT 1", 100), "SELECT 1");
        assert_eq!(truncate_sql_bytes("SELECT 1", 6), "SELECT");
        // 'é' is two bytes; cutting inside it backs off
        assert_eq!(truncate_sql_bytes("café", 4), "caf");
    }
}
