//! SQL-language function definitions.
//!
//! A [`PostgresFunctionDefinition`] declares a named function with a body,
//! a return type, and an implementation language (PL/pgSQL by default).
//! The body may reference the owning table through a `%(table)s`
//! placeholder, substituted with the quoted table name at render time.
//! [`PostgresTriggerFunctionDefinition`] builds the trigger-returning
//! variant.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ddl::{Statement, Table};
use crate::error::DdlResult;
use crate::expr::Func;
use crate::schema_editor::SchemaEditor;

const CREATE_TEMPLATE: &str =
	"CREATE FUNCTION %(name)s() RETURNS %(returns)s AS $$ %(body)s $$ LANGUAGE %(language)s;";

const REMOVE_TEMPLATE: &str = "DROP FUNCTION %(name)s()";

/// Default implementation language for function bodies.
pub const DEFAULT_LANGUAGE: &str = "plpgsql";

fn default_language() -> String {
	DEFAULT_LANGUAGE.to_owned()
}

/// A declarative PostgreSQL SQL-language function.
///
/// Immutable after construction; the body is trimmed of leading and
/// trailing whitespace but otherwise stored verbatim, so its internal line
/// breaks survive into the rendered DDL.
///
/// # Examples
///
/// ```rust
/// use reinhardt_pg_ddl::prelude::*;
///
/// let function = PostgresFunctionDefinition::new(
///     "my_function",
///     "BEGIN RETURN NEW; END;",
///     "trigger",
/// );
///
/// let editor = PostgresSchemaEditor::new();
/// assert_eq!(
///     function.create_sql("accounts", &editor).to_string(),
///     "CREATE FUNCTION my_function() RETURNS trigger AS $$ BEGIN RETURN NEW; END; $$ LANGUAGE plpgsql;",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresFunctionDefinition {
	name: String,
	body: String,
	returns: String,
	#[serde(default = "default_language")]
	language: String,
}

impl PostgresFunctionDefinition {
	/// Deconstruction path identifying this definition type.
	pub const PATH: &'static str = "reinhardt_pg_ddl::PostgresFunctionDefinition";

	/// Declare a function returning `returns`, in PL/pgSQL.
	pub fn new(name: impl Into<String>, body: &str, returns: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			body: body.trim().to_owned(),
			returns: returns.into(),
			language: default_language(),
		}
	}

	/// Override the implementation language.
	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = language.into();
		self
	}

	/// The function name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The trimmed function body.
	pub fn body(&self) -> &str {
		&self.body
	}

	/// The declared return type.
	pub fn returns(&self) -> &str {
		&self.returns
	}

	/// The implementation language.
	pub fn language(&self) -> &str {
		&self.language
	}

	/// Render the CREATE FUNCTION statement.
	///
	/// The quoted name of `table` is substituted for any `%(table)s`
	/// placeholder in the body; a body without the placeholder ignores the
	/// table argument.
	pub fn create_sql(&self, table: &str, schema_editor: &dyn SchemaEditor) -> Statement {
		debug!(function = %self.name, table, "rendering CREATE FUNCTION");
		let table = Table::new(table, schema_editor);
		let body = Statement::new(&self.body).part("table", &table).to_string();

		Statement::new(CREATE_TEMPLATE)
			.part("name", &self.name)
			.part("returns", &self.returns)
			.part("body", body)
			.part("language", &self.language)
	}

	/// Render the DROP FUNCTION statement.
	pub fn remove_sql(&self) -> Statement {
		debug!(function = %self.name, "rendering DROP FUNCTION");
		Statement::new(REMOVE_TEMPLATE).part("name", &self.name)
	}

	/// Serialize to a reconstruction recipe for migration diffing.
	///
	/// Unlike [`ConstraintTrigger`](crate::ConstraintTrigger), all four
	/// attributes are serialized unconditionally.
	pub fn deconstruct(&self) -> DdlResult<(&'static str, serde_json::Value)> {
		Ok((Self::PATH, serde_json::to_value(self)?))
	}

	/// Rebuild a definition from a [`deconstruct`](Self::deconstruct) recipe.
	pub fn reconstruct(kwargs: serde_json::Value) -> DdlResult<Self> {
		Ok(serde_json::from_value(kwargs)?)
	}

	/// A call reference to this function, usable as a
	/// [`ConstraintTrigger`](crate::ConstraintTrigger) procedure.
	pub fn as_func(&self) -> Func {
		Func::new(&self.name)
	}
}

/// Factory for trigger-returning function definitions.
///
/// The return type is fixed to `trigger` by construction; callers cannot
/// supply a competing value.
///
/// # Examples
///
/// ```rust
/// use reinhardt_pg_ddl::PostgresTriggerFunctionDefinition;
///
/// let function =
///     PostgresTriggerFunctionDefinition::new("f", "BEGIN RETURN NEW; END;");
/// assert_eq!(function.returns(), "trigger");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PostgresTriggerFunctionDefinition;

impl PostgresTriggerFunctionDefinition {
	/// Declare a function returning `trigger`.
	pub fn new(name: impl Into<String>, body: &str) -> PostgresFunctionDefinition {
		PostgresFunctionDefinition::new(name, body, "trigger")
	}
}
