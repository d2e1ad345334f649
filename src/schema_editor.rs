//! Schema editor quoting capability.
//!
//! The trigger and function definitions never execute SQL themselves; they
//! render DDL text against this capability trait. A live migration executor
//! supplies its own implementation backed by a connection; this crate ships
//! [`PostgresSchemaEditor`] for rendering without one.

use crate::types::DeferrableOption;
use crate::value::Value;

/// Quoting and clause-rendering services consumed during DDL rendering.
pub trait SchemaEditor {
	/// Quote a schema object identifier (trigger name, table name).
	fn quote_name(&self, name: &str) -> String;

	/// Quote a parameter as a literal suitable for inlining into DDL text.
	fn quote_value(&self, value: &Value) -> String;

	/// Render the deferrability clause for a constraint trigger.
	///
	/// Returns an empty string for `None`, otherwise the clause prefixed
	/// with a single space so it can be appended directly after the table
	/// reference.
	fn deferrable_sql(&self, deferrable: Option<DeferrableOption>) -> String {
		match deferrable {
			None => String::new(),
			Some(option) => format!(" {}", option),
		}
	}
}

/// PostgreSQL quoting rules, with no connection attached.
///
/// Identifiers are always double-quoted (embedded quotes doubled); literals
/// are escaped with [`pg_escape::quote_literal`].
///
/// # Examples
///
/// ```rust
/// use reinhardt_pg_ddl::{PostgresSchemaEditor, SchemaEditor, Value};
///
/// let editor = PostgresSchemaEditor::new();
/// assert_eq!(editor.quote_name("my_trigger"), "\"my_trigger\"");
/// assert_eq!(editor.quote_value(&Value::from("it's")), "'it''s'");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresSchemaEditor;

impl PostgresSchemaEditor {
	/// Create a new PostgreSQL schema editor.
	pub fn new() -> Self {
		Self
	}
}

impl SchemaEditor for PostgresSchemaEditor {
	fn quote_name(&self, name: &str) -> String {
		format!("\"{}\"", name.replace('"', "\"\""))
	}

	fn quote_value(&self, value: &Value) -> String {
		match value {
			Value::Bool(true) => "TRUE".to_owned(),
			Value::Bool(false) => "FALSE".to_owned(),
			Value::Int(i) => i.to_string(),
			Value::BigInt(i) => i.to_string(),
			Value::Double(d) => d.to_string(),
			Value::String(s) => pg_escape::quote_literal(s),
			Value::Null => "NULL".to_owned(),
		}
	}
}
