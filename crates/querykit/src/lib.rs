//! # querykit
//!
//! A fluent SQL statement builder with positional parameter binding.
//!
//! ## Features
//!
//! - **Four statement shapes**: SELECT, INSERT, UPDATE and DELETE over one table
//! - **Parameterized output**: `?` placeholders plus ordered bindings and `i`/`d`/`s` type tags
//! - **Raw fragments**: WHERE/HAVING snippets passed through verbatim, never bound
//! - **Inline rendering**: a literal-substituted statement for logs (never for execution)
//! - **Reusable**: `clear()` resets a builder for the next statement on the same table
//!
//! Executing the statement is left to the caller's database layer: hand it
//! [`BuiltStatement::sql`], [`BuiltStatement::bindings`] and, for APIs that
//! want per-parameter types, [`BuiltStatement::binding_types`].
//!
//! ```
//! use querykit::{StatementBuilder, Value};
//!
//! let mut qb = StatementBuilder::new("users");
//! qb.update().set("email", "e@x").where_eq("id", 5);
//!
//! assert_eq!(qb.build()?, "UPDATE users SET email = ? WHERE id = ?");
//! assert_eq!(qb.bindings(), &[Value::from("e@x"), Value::from(5)]);
//! assert_eq!(qb.binding_types(), "si");
//! assert_eq!(qb.to_sql()?, "UPDATE users SET email = 'e@x' WHERE id = 5");
//! # Ok::<(), querykit::QueryError>(())
//! ```
//!
//! Enable the `tracing` feature and [`BuilderConfig::enable_logging`] to emit
//! each rendered statement on the `querykit.sql` target.

pub mod builder;
pub mod config;
pub mod error;
pub mod statement;
pub mod value;

pub use builder::{ColumnValues, Condition, Direction, StatementBuilder, StatementKind};
pub use config::{BuilderConfig, MissingKind};
pub use error::{QueryError, QueryResult};
pub use statement::BuiltStatement;
pub use value::Value;
