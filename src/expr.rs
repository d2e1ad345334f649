//! Minimal expression vocabulary for trigger definitions.
//!
//! A constraint trigger needs exactly two expression shapes: the procedure
//! call it executes ([`Func`]) and an optional boolean row filter
//! ([`Condition`]). Both compile to SQL text with positional `%s` markers
//! plus a parameter list; the trigger substitutes each parameter as a quoted
//! literal at render time.

use serde::{Deserialize, Serialize};

use crate::schema_editor::SchemaEditor;
use crate::value::Value;

/// An expression that compiles to parameterized SQL text.
pub trait SqlExpr {
	/// Render to SQL with `%s` parameter markers plus the parameter list.
	fn as_sql(&self) -> (String, Vec<Value>);
}

/// A named SQL function-call expression.
///
/// # Examples
///
/// ```rust
/// use reinhardt_pg_ddl::{Func, SqlExpr, Value};
///
/// let func = Func::new("check_balance").arg(Value::from(0));
/// let (sql, params) = func.as_sql();
/// assert_eq!(sql, "check_balance(%s)");
/// assert_eq!(params, vec![Value::Int(0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Func {
	function: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	args: Vec<Value>,
}

impl Func {
	/// Create a call expression for the named function.
	pub fn new(function: impl Into<String>) -> Self {
		Self {
			function: function.into(),
			args: Vec::new(),
		}
	}

	/// Append a literal argument to the call.
	pub fn arg(mut self, value: impl Into<Value>) -> Self {
		self.args.push(value.into());
		self
	}

	/// The function name being called.
	pub fn function(&self) -> &str {
		&self.function
	}
}

impl SqlExpr for Func {
	fn as_sql(&self) -> (String, Vec<Value>) {
		let markers = vec!["%s"; self.args.len()].join(", ");
		(format!("{}({})", self.function, markers), self.args.clone())
	}
}

/// A raw boolean row-filter expression with `%s` parameter markers.
///
/// # Examples
///
/// ```rust
/// use reinhardt_pg_ddl::{Condition, SqlExpr};
///
/// let cond = Condition::raw("status = %s").param("active");
/// let (sql, params) = cond.as_sql();
/// assert_eq!(sql, "status = %s");
/// assert_eq!(params.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
	sql: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	params: Vec<Value>,
}

impl Condition {
	/// Create a condition from raw SQL text.
	pub fn raw(sql: impl Into<String>) -> Self {
		Self {
			sql: sql.into(),
			params: Vec::new(),
		}
	}

	/// Append a literal parameter for the next `%s` marker.
	pub fn param(mut self, value: impl Into<Value>) -> Self {
		self.params.push(value.into());
		self
	}
}

impl SqlExpr for Condition {
	fn as_sql(&self) -> (String, Vec<Value>) {
		(self.sql.clone(), self.params.clone())
	}
}

/// Substitute each `%s` marker with the corresponding quoted literal.
///
/// Surplus markers are left verbatim and surplus parameters are dropped;
/// marker/parameter mismatch is the expression author's responsibility.
pub(crate) fn fill_placeholders(
	sql: &str,
	params: &[Value],
	schema_editor: &dyn SchemaEditor,
) -> String {
	let mut rendered = String::with_capacity(sql.len());
	let mut chunks = sql.split("%s");
	let mut params = params.iter();
	if let Some(first) = chunks.next() {
		rendered.push_str(first);
	}
	for chunk in chunks {
		match params.next() {
			Some(value) => rendered.push_str(&schema_editor.quote_value(value)),
			None => rendered.push_str("%s"),
		}
		rendered.push_str(chunk);
	}
	rendered
}
