//! The result of rendering a builder.

use crate::value::Value;

/// A rendered statement ready to hand to a prepared-statement API.
///
/// [`sql`](Self::sql) contains one `?` placeholder per entry of
/// [`bindings`](Self::bindings), in the same order;
/// [`binding_types`](Self::binding_types) holds one type tag per binding.
///
/// The parts are read-only so the recorded placeholder offsets always match
/// the SQL text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltStatement {
    sql: String,
    bindings: Vec<Value>,
    binding_types: String,
    /// Byte offsets of the placeholders in `sql`.
    placeholders: Vec<usize>,
}

impl BuiltStatement {
    pub(crate) fn new(sql: String, bindings: Vec<Value>, placeholders: Vec<usize>) -> Self {
        debug_assert_eq!(bindings.len(), placeholders.len());
        let binding_types = bindings.iter().map(Value::type_tag).collect();
        Self {
            sql,
            bindings,
            binding_types,
            placeholders,
        }
    }

    /// SQL text with `?` placeholders.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Values bound to the placeholders, in order.
    pub fn bindings(&self) -> &[Value] {
        &self.bindings
    }

    /// One `i`/`d`/`s` tag per binding.
    pub fn binding_types(&self) -> &str {
        &self.binding_types
    }

    /// Take the SQL, bindings and type tags apart.
    pub fn into_parts(self) -> (String, Vec<Value>, String) {
        (self.sql, self.bindings, self.binding_types)
    }

    /// Number of bound parameters.
    pub fn param_count(&self) -> usize {
        self.bindings.len()
    }

    /// Check if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Substitute every placeholder with the literal of its binding.
    ///
    /// Only the placeholders the builder emitted are replaced, so a `?` inside
    /// a raw fragment or inside a substituted string is left alone.
    ///
    /// **Not safe for execution**: the escaping is minimal and exists for
    /// logging and debugging only.
    pub fn to_inline_sql(&self) -> String {
        let mut out = String::with_capacity(self.sql.len() + self.bindings.len() * 8);
        let mut cursor = 0;
        for (&pos, value) in self.placeholders.iter().zip(&self.bindings) {
            out.push_str(&self.sql[cursor..pos]);
            value.write_literal(&mut out);
            cursor = pos + 1;
        }
        out.push_str(&self.sql[cursor..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(sql: &str, bindings: Vec<Value>) -> BuiltStatement {
        let placeholders = sql.match_indices('?').map(|(i, _)| i).collect();
        BuiltStatement::new(sql.to_string(), bindings, placeholders)
    }

    #[test]
    fn test_accessors_and_tags() {
        let st = built("SELECT * FROM t WHERE a = ? AND b = ?", vec![Value::Int(1), Value::Float(0.5)]);
        assert_eq!(st.sql(), "SELECT * FROM t WHERE a = ? AND b = ?");
        assert_eq!(st.bindings(), [Value::Int(1), Value::Float(0.5)]);
        assert_eq!(st.binding_types(), "id");
        assert_eq!(st.param_count(), 2);
    }

    #[test]
    fn test_inline_sql_uses_recorded_offsets() {
        let st = built("UPDATE t SET a = ? WHERE b = ?", vec![Value::from("x?"), Value::Int(2)]);
        assert_eq!(st.to_inline_sql(), "UPDATE t SET a = 'x?' WHERE b = 2");
    }

    #[test]
    fn test_into_parts() {
        let st = built("DELETE FROM t WHERE id = ?", vec![Value::Int(7)]);
        let (sql, bindings, types) = st.into_parts();
        assert_eq!(sql, "DELETE FROM t WHERE id = ?");
        assert_eq!(bindings, [Value::Int(7)]);
        assert_eq!(types, "i");
    }

    #[test]
    fn test_default_is_empty() {
        let st = BuiltStatement::default();
        assert!(st.is_empty());
        assert_eq!(st.to_inline_sql(), "");
    }
}
