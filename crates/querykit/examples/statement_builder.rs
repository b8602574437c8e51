//! Example demonstrating querykit's statement builder.
//!
//! Run with:
//!   cargo run --example statement_builder -p querykit

use querykit::{BuiltStatement, Direction, QueryResult, StatementBuilder, Value};

#[derive(Debug)]
struct Filters {
    role: Option<String>,
    min_karma: Option<i64>,
    page: u64,
    per_page: u64,
}

fn list_users(qb: &mut StatementBuilder, filters: &Filters) -> QueryResult<BuiltStatement> {
    qb.clear().select_cols(&["id", "name", "karma"]);

    if let Some(role) = &filters.role {
        qb.where_eq("role", role);
    }
    if let Some(min_karma) = filters.min_karma {
        // trusted integer, so a raw fragment is fine here
        qb.where_raw(&format!("karma >= {min_karma}"));
    }

    qb.order_by("karma", Direction::Desc)
        .limit(filters.per_page)
        .offset(filters.page.saturating_sub(1) * filters.per_page);

    qb.statement()
}

fn print_statement(label: &str, built: &BuiltStatement) {
    println!("{label}:");
    println!("  sql:      {}", built.sql());
    println!("  bindings: {:?}", built.bindings());
    println!("  types:    {}", built.binding_types());
    println!("  inline:   {}", built.to_inline_sql());
}

fn main() -> QueryResult<()> {
    let mut qb = StatementBuilder::try_new("users")?;

    let filters = Filters {
        role: Some("admin".to_string()),
        min_karma: Some(10),
        page: 2,
        per_page: 20,
    };
    println!("{filters:?}");
    print_statement("list", &list_users(&mut qb, &filters)?);

    qb.clear()
        .insert([
            ("name", Value::from("O'Brien")),
            ("karma", Value::from(0)),
            ("ratio", Value::from(0.5)),
        ]);
    print_statement("insert", &qb.statement()?);

    qb.clear().update().set("karma", 11).where_eq("name", "O'Brien");
    print_statement("update", &qb.statement()?);

    qb.clear().select_all().count().where_eq("role", "admin");
    println!("count: {qb}");

    Ok(())
}
