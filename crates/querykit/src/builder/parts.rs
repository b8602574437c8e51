//! Building blocks the statement builder accumulates.

use crate::error::QueryError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Which statement is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// SELECT query
    Select,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
    /// DELETE statement
    Delete,
}

impl StatementKind {
    /// The SQL keyword for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ORDER BY direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = QueryError;

    /// Parse `asc`/`desc` in any case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("asc") {
            Ok(Direction::Asc)
        } else if trimmed.eq_ignore_ascii_case("desc") {
            Ok(Direction::Desc)
        } else {
            Err(QueryError::InvalidDirection(s.to_string()))
        }
    }
}

/// One WHERE fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column = ?`, with `value` bound.
    Keyed { column: String, value: Value },
    /// Verbatim SQL, never bound.
    Raw(String),
}

/// Ordered column -> value pairs.
///
/// Re-setting a column replaces its value but keeps the column's original slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnValues {
    entries: Vec<(String, Value)>,
}

impl ColumnValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `column` in place.
    pub fn set(&mut self, column: String, value: Value) {
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ColumnValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = ColumnValues::new();
        for (column, value) in iter {
            values.set(column.into(), value.into());
        }
        values
    }
}

/// The active statement kind together with the state its renderer reads.
///
/// Borrowed from the builder at render time; the builder itself keeps every
/// kind's state regardless of which kind is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Statement<'a> {
    /// Empty `columns` renders as `*`; `count` renders `COUNT(*)` instead.
    Select { columns: &'a [String], count: bool },
    Insert(&'a ColumnValues),
    Update(&'a ColumnValues),
    Delete,
}

impl Statement<'_> {
    pub(crate) fn kind(&self) -> StatementKind {
        match self {
            Statement::Select { .. } => StatementKind::Select,
            Statement::Insert(_) => StatementKind::Insert,
            Statement::Update(_) => StatementKind::Update,
            Statement::Delete => StatementKind::Delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("asc".parse::<Direction>().unwrap(), Direction::Asc);
        assert_eq!(" DESC ".parse::<Direction>().unwrap(), Direction::Desc);
        assert_eq!("Desc".parse::<Direction>().unwrap(), Direction::Desc);
        assert_eq!(
            "sideways".parse::<Direction>().unwrap_err(),
            QueryError::InvalidDirection("sideways".to_string())
        );
        assert_eq!(Direction::default(), Direction::Asc);
    }

    #[test]
    fn test_column_values_overwrite_keeps_slot() {
        let mut values = ColumnValues::new();
        values.set("a".into(), Value::Int(1));
        values.set("b".into(), Value::Int(2));
        values.set("a".into(), Value::Int(3));

        let cols: Vec<&str> = values.iter().map(|(c, _)| c).collect();
        assert_eq!(cols, ["a", "b"]);
        assert_eq!(values.get("a"), Some(&Value::Int(3)));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_column_values_from_iter_dedups() {
        let values: ColumnValues = [("x", 1i32), ("y", 2), ("x", 9)].into_iter().collect();
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("x"), Some(&Value::Int(9)));
    }

    #[test]
    fn test_statement_kind() {
        let select = Statement::Select {
            columns: &[],
            count: false,
        };
        assert_eq!(select.kind(), StatementKind::Select);
        assert_eq!(Statement::Delete.kind().to_string(), "DELETE");
    }
}
