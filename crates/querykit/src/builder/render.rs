//! Statement and clause renderers.

use super::StatementBuilder;
use super::parts::{ColumnValues, Condition, Statement};
use crate::config::MissingKind;
use crate::error::{QueryError, QueryResult};
use crate::statement::BuiltStatement;
use crate::value::Value;

/// SQL text plus the values bound to its placeholders, in emission order.
struct SqlWriter {
    sql: String,
    bindings: Vec<Value>,
    placeholders: Vec<usize>,
}

impl SqlWriter {
    fn new() -> Self {
        Self {
            sql: String::new(),
            bindings: Vec::new(),
            placeholders: Vec::new(),
        }
    }

    fn push(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    fn push_bind(&mut self, value: &Value) {
        self.placeholders.push(self.sql.len());
        self.sql.push('?');
        self.bindings.push(value.clone());
    }

    fn finish(self) -> BuiltStatement {
        BuiltStatement::new(self.sql, self.bindings, self.placeholders)
    }
}

impl StatementBuilder {
    /// Render the current state without touching the stored bindings.
    pub(crate) fn render(&self) -> QueryResult<BuiltStatement> {
        let Some(statement) = self.active_statement() else {
            return match self.config.missing_kind {
                MissingKind::Error => Err(QueryError::NoStatementKind(self.table.clone())),
                MissingKind::Empty => Ok(BuiltStatement::default()),
            };
        };

        let mut w = SqlWriter::new();
        match statement {
            Statement::Select { columns, count } => self.render_select(&mut w, columns, count),
            Statement::Insert(values) => self.render_insert(&mut w, values),
            Statement::Update(assignments) => self.render_update(&mut w, assignments),
            Statement::Delete => self.render_delete(&mut w),
        }
        Ok(w.finish())
    }

    fn render_select(&self, w: &mut SqlWriter, columns: &[String], count: bool) {
        w.push("SELECT ");
        if count {
            w.push("COUNT(*)");
        } else if columns.is_empty() {
            w.push("*");
        } else {
            w.push(&columns.join(", "));
        }
        w.push(" FROM ");
        w.push(&self.table);
        self.render_where(w);
        self.render_having(w);
        self.render_order_by(w);
        self.render_limit_offset(w);
    }

    fn render_update(&self, w: &mut SqlWriter, assignments: &ColumnValues) {
        w.push("UPDATE ");
        w.push(&self.table);
        w.push(" SET ");
        for (i, (column, value)) in assignments.iter().enumerate() {
            if i > 0 {
                w.push(", ");
            }
            w.push(column);
            w.push(" = ");
            w.push_bind(value);
        }
        self.render_where(w);
    }

    fn render_delete(&self, w: &mut SqlWriter) {
        w.push("DELETE FROM ");
        w.push(&self.table);
        self.render_where(w);
    }

    fn render_insert(&self, w: &mut SqlWriter, values: &ColumnValues) {
        w.push("INSERT INTO ");
        w.push(&self.table);
        w.push(" (");
        for (i, (column, _)) in values.iter().enumerate() {
            if i > 0 {
                w.push(", ");
            }
            w.push(column);
        }
        w.push(") VALUES (");
        for (i, (_, value)) in values.iter().enumerate() {
            if i > 0 {
                w.push(", ");
            }
            w.push_bind(value);
        }
        w.push(")");
    }

    fn render_where(&self, w: &mut SqlWriter) {
        if self.conditions.is_empty() {
            return;
        }
        w.push(" WHERE ");
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                w.push(" AND ");
            }
            match condition {
                Condition::Raw(sql) => w.push(sql),
                Condition::Keyed { column, value } => {
                    w.push(column);
                    w.push(" = ");
                    w.push_bind(value);
                }
            }
        }
    }

    fn render_having(&self, w: &mut SqlWriter) {
        if self.having.is_empty() {
            return;
        }
        w.push(" HAVING ");
        w.push(&self.having.join(" AND "));
    }

    /// An empty column counts as no ordering.
    fn render_order_by(&self, w: &mut SqlWriter) {
        if let Some((column, direction)) = self.order.as_ref().filter(|(c, _)| !c.trim().is_empty()) {
            w.push(" ORDER BY ");
            w.push(column);
            w.push(" ");
            w.push(direction.as_str());
        }
    }

    fn render_limit_offset(&self, w: &mut SqlWriter) {
        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            w.push(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset.filter(|n| *n > 0) {
            w.push(&format!(" OFFSET {offset}"));
        }
    }
}
