//! Deferred DDL statement references.
//!
//! A [`Statement`] pairs a template with named parts and renders only when
//! converted to text, replacing `%(name)s` placeholders. This mirrors how
//! migration executors hold DDL: the pieces stay inspectable until the
//! statement is finally stringified for execution.

use indexmap::IndexMap;

use crate::schema_editor::SchemaEditor;

/// A DDL statement template with named, insertion-ordered parts.
///
/// Placeholders take the form `%(name)s`. A placeholder with no registered
/// part is left verbatim; a part with no matching placeholder is silently
/// unused.
///
/// # Examples
///
/// ```rust
/// use reinhardt_pg_ddl::Statement;
///
/// let stmt = Statement::new("DROP TRIGGER %(name)s ON %(table)s")
///     .part("name", "\"my_trigger\"")
///     .part("table", "\"accounts\"");
/// assert_eq!(stmt.to_string(), "DROP TRIGGER \"my_trigger\" ON \"accounts\"");
/// ```
#[derive(Debug, Clone)]
pub struct Statement {
	template: String,
	parts: IndexMap<String, String>,
}

impl Statement {
	/// Create a statement from a template.
	pub fn new(template: impl Into<String>) -> Self {
		Self {
			template: template.into(),
			parts: IndexMap::new(),
		}
	}

	/// Register a named part for substitution.
	pub fn part(mut self, name: impl Into<String>, value: impl ToString) -> Self {
		self.parts.insert(name.into(), value.to_string());
		self
	}

	/// The raw template before substitution.
	pub fn template(&self) -> &str {
		&self.template
	}
}

impl std::fmt::Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut rendered = self.template.clone();
		for (name, value) in &self.parts {
			rendered = rendered.replace(&format!("%({})s", name), value);
		}
		f.write_str(&rendered)
	}
}

/// A table reference carrying both the raw and quoted table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
	name: String,
	quoted: String,
}

impl Table {
	/// Build a reference to `name`, quoting it through the schema editor.
	pub fn new(name: &str, schema_editor: &dyn SchemaEditor) -> Self {
		Self {
			name: name.to_owned(),
			quoted: schema_editor.quote_name(name),
		}
	}

	/// The unquoted table name.
	pub fn name(&self) -> &str {
		&self.name
	}
}

impl std::fmt::Display for Table {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.quoted)
	}
}
