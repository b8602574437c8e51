//! The fluent statement builder.
//!
//! A [`StatementBuilder`] accumulates build intent for one table across any
//! number of chained calls, then renders on demand:
//!
//! - [`build`](StatementBuilder::build) returns SQL with `?` placeholders and
//!   records the bound values and their type tags;
//! - [`to_sql`](StatementBuilder::to_sql) returns the same statement with the
//!   values inlined, for logs only.
//!
//! # Example
//!
//! ```
//! use querykit::{Direction, StatementBuilder};
//!
//! let mut qb = StatementBuilder::new("users");
//! let sql = qb
//!     .select_all()
//!     .where_eq("role", "admin")
//!     .where_raw("karma > 10")
//!     .order_by("created_at", Direction::Desc)
//!     .limit(10)
//!     .build()?;
//!
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM users WHERE role = ? AND karma > 10 ORDER BY created_at DESC LIMIT 10"
//! );
//! assert_eq!(qb.binding_types(), "s");
//! # Ok::<(), querykit::QueryError>(())
//! ```

mod parts;
mod render;


pub use parts::{ColumnValues, Condition, Direction, StatementKind};

use crate::config::BuilderConfig;
use crate::error::{QueryError, QueryResult};
use crate::statement::BuiltStatement;
use crate::value::Value;
use parts::Statement;
use std::fmt;

/// Mutable SQL statement accumulator for a single table.
///
/// Mutators return `&mut Self` and may be called in any order. The most
/// recent `select*`/`insert`/`update`/`delete` call decides the statement
/// kind. Every other piece of state (SELECT columns, the count flag, UPDATE
/// assignments, insert data, conditions, HAVING, ordering, paging) is kept
/// independently of the kind and is simply not read by renderers of other
/// kinds. `set("a", 1).update()` therefore renders the assignment.
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    table: String,
    kind: Option<StatementKind>,
    columns: Vec<String>,
    count: bool,
    assignments: ColumnValues,
    insert_values: ColumnValues,
    conditions: Vec<Condition>,
    having: Vec<String>,
    order: Option<(String, Direction)>,
    limit: Option<u64>,
    offset: Option<u64>,
    bindings: Vec<Value>,
    binding_types: String,
    config: BuilderConfig,
}

impl StatementBuilder {
    /// Create a builder for `table`.
    ///
    /// The name is not validated and is reflected verbatim into the SQL.
    pub fn new(table: impl Into<String>) -> Self {
        Self::with_config(table, BuilderConfig::default())
    }

    /// Create a builder for `table`, rejecting an empty or blank name.
    pub fn try_new(table: impl Into<String>) -> QueryResult<Self> {
        let table = table.into();
        if table.trim().is_empty() {
            return Err(QueryError::EmptyTable);
        }
        Ok(Self::new(table))
    }

    /// Create a builder with an explicit configuration.
    pub fn with_config(table: impl Into<String>, config: BuilderConfig) -> Self {
        Self {
            table: table.into(),
            kind: None,
            columns: Vec::new(),
            count: false,
            assignments: ColumnValues::new(),
            insert_values: ColumnValues::new(),
            conditions: Vec::new(),
            having: Vec::new(),
            order: None,
            limit: None,
            offset: None,
            bindings: Vec::new(),
            binding_types: String::new(),
            config,
        }
    }

    // ==================== Statement kind ====================

    /// Make SELECT the active kind and append one column.
    ///
    /// `col` may be a column name, `*`, or any raw expression such as
    /// `"id, name"` or `"MAX(score)"`. Repeated calls accumulate.
    pub fn select(&mut self, col: &str) -> &mut Self {
        self.kind = Some(StatementKind::Select);
        self.columns.push(col.to_string());
        self
    }

    /// Make SELECT the active kind and append several columns.
    pub fn select_cols(&mut self, cols: &[&str]) -> &mut Self {
        self.kind = Some(StatementKind::Select);
        self.columns.extend(cols.iter().map(|c| c.to_string()));
        self
    }

    /// Make SELECT the active kind without adding columns (renders `*` if
    /// none were added).
    pub fn select_all(&mut self) -> &mut Self {
        self.kind = Some(StatementKind::Select);
        self
    }

    /// Make UPDATE the active kind. Assignments given via [`set`](Self::set)
    /// before or after this call are rendered.
    pub fn update(&mut self) -> &mut Self {
        self.kind = Some(StatementKind::Update);
        self
    }

    /// Make DELETE the active kind.
    pub fn delete(&mut self) -> &mut Self {
        self.kind = Some(StatementKind::Delete);
        self
    }

    /// Make INSERT the active kind with `data` as the row.
    ///
    /// Replaces any previously given insert data. Columns and placeholders are
    /// emitted in iteration order; a repeated column keeps its first slot and
    /// its last value.
    pub fn insert<I, K, V>(&mut self, data: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.kind = Some(StatementKind::Insert);
        self.insert_values = data.into_iter().collect();
        self
    }

    // ==================== Kind-specific state ====================

    /// Add or overwrite an UPDATE assignment `column = ?`.
    ///
    /// Recorded whatever the active kind is; only UPDATE renders it.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.assignments.set(column.to_string(), value.into());
        self
    }

    /// Render the SELECT column list as `COUNT(*)`.
    ///
    /// Recorded whatever the active kind is; only SELECT renders it.
    pub fn count(&mut self) -> &mut Self {
        self.count = true;
        self
    }

    // ==================== WHERE / HAVING ====================

    /// Add a parameter-bound `column = ?` condition.
    ///
    /// A second call for the same column replaces the value in place, so the
    /// condition keeps the position of its first insertion.
    pub fn where_eq(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        let existing = self.conditions.iter_mut().find_map(|c| match c {
            Condition::Keyed { column: col, value: v } if col == column => Some(v),
            _ => None,
        });
        match existing {
            Some(slot) => *slot = value,
            None => self.conditions.push(Condition::Keyed {
                column: column.to_string(),
                value,
            }),
        }
        self
    }

    /// Apply [`where_eq`](Self::where_eq) to each pair, in iteration order.
    pub fn where_all<I, K, V>(&mut self, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (column, value) in conditions {
            self.where_eq(column.as_ref(), value);
        }
        self
    }

    /// Append a raw WHERE fragment. It is emitted verbatim and never bound.
    pub fn where_raw(&mut self, sql: &str) -> &mut Self {
        self.conditions.push(Condition::Raw(sql.to_string()));
        self
    }

    /// Append a raw HAVING fragment. It is emitted verbatim and never bound.
    pub fn having(&mut self, sql: &str) -> &mut Self {
        self.having.push(sql.to_string());
        self
    }

    // ==================== Ordering & paging ====================

    /// Set the ORDER BY pair, replacing any previous one.
    pub fn order_by(&mut self, column: &str, direction: Direction) -> &mut Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    /// ORDER BY column ASC.
    pub fn order_by_asc(&mut self, column: &str) -> &mut Self {
        self.order_by(column, Direction::Asc)
    }

    /// ORDER BY column DESC.
    pub fn order_by_desc(&mut self, column: &str) -> &mut Self {
        self.order_by(column, Direction::Desc)
    }

    /// Set LIMIT. Zero omits the clause.
    pub fn limit(&mut self, n: u64) -> &mut Self {
        self.limit = Some(n);
        self
    }

    /// Set OFFSET. Zero omits the clause.
    pub fn offset(&mut self, n: u64) -> &mut Self {
        self.offset = Some(n);
        self
    }

    // ==================== Rendering ====================

    /// Render the statement with `?` placeholders.
    ///
    /// Resets and rebuilds [`bindings`](Self::bindings) and
    /// [`binding_types`](Self::binding_types). Nothing is executed.
    pub fn build(&mut self) -> QueryResult<String> {
        let (sql, _, _) = self.statement()?.into_parts();
        Ok(sql)
    }

    /// Render the statement with every placeholder replaced by a literal.
    ///
    /// **Debug/log only.** Escaping is minimal and does not defend against
    /// untrusted input; never execute the result.
    pub fn to_sql(&mut self) -> QueryResult<String> {
        Ok(self.statement()?.to_inline_sql())
    }

    /// Render and return an owned statement for an execution layer.
    ///
    /// Also records the bindings and type tags like [`build`](Self::build).
    pub fn statement(&mut self) -> QueryResult<BuiltStatement> {
        self.bindings.clear();
        self.binding_types.clear();

        let built = self.render()?;
        self.log_statement(&built);
        self.bindings.extend_from_slice(built.bindings());
        self.binding_types.push_str(built.binding_types());
        Ok(built)
    }

    // ==================== Accessors ====================

    /// Values bound by the most recent render (empty before any render).
    pub fn bindings(&self) -> &[Value] {
        &self.bindings
    }

    /// Type tags of the most recent render, one per binding.
    pub fn binding_types(&self) -> &str {
        &self.binding_types
    }

    /// The target table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The active statement kind, if any.
    pub fn kind(&self) -> Option<StatementKind> {
        self.kind
    }

    /// The active kind borrowed together with the state its renderer reads.
    fn active_statement(&self) -> Option<Statement<'_>> {
        let statement = match self.kind? {
            StatementKind::Select => Statement::Select {
                columns: &self.columns,
                count: self.count,
            },
            StatementKind::Insert => Statement::Insert(&self.insert_values),
            StatementKind::Update => Statement::Update(&self.assignments),
            StatementKind::Delete => Statement::Delete,
        };
        Some(statement)
    }

    /// The builder configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Reset everything except the table and configuration.
    pub fn clear(&mut self) -> &mut Self {
        self.kind = None;
        self.columns.clear();
        self.count = false;
        self.assignments = ColumnValues::new();
        self.insert_values = ColumnValues::new();
        self.conditions.clear();
        self.having.clear();
        self.order = None;
        self.limit = None;
        self.offset = None;
        self.bindings.clear();
        self.binding_types.clear();
        self
    }

    // ==================== Logging ====================

    #[cfg(feature = "tracing")]
    fn log_statement(&self, built: &BuiltStatement) {
        use crate::config::truncate_sql_bytes;
        use tracing::Level;

        if !self.config.log_statements {
            return;
        }

        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = match self.config.max_log_sql_length {
            Some(max) if built.sql().len() > max => {
                format!("{}...", truncate_sql_bytes(built.sql(), max))
            }
            _ => built.sql().to_string(),
        };
        let kind = self.kind().map_or("-", |k| k.as_str());
        emit_at_level!(
            self.config.log_level,
            target: "querykit.sql",
            table = %self.table,
            kind,
            param_count = built.param_count(),
            binding_types = %built.binding_types(),
            sql = %sql,
        );
    }

    #[cfg(not(feature = "tracing"))]
    fn log_statement(&self, _built: &BuiltStatement) {}
}

impl fmt::Display for StatementBuilder {
    /// Same SQL as [`build`](StatementBuilder::build), without recording
    /// bindings. Renders nothing when no statement kind is selected.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(built) => f.write_str(built.sql()),
            Err(_) => Ok(()),
        }
    }
}
