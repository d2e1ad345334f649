//! Constraint trigger definitions.
//!
//! A [`ConstraintTrigger`] declares a named PostgreSQL constraint trigger on
//! a table: the events it fires after, the procedure it executes, an
//! optional row filter, and an optional deferrability mode. It renders the
//! CREATE/DROP statement pair for the migration executor and supports
//! structural equality and deconstruction for migration diffing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ddl::{Statement, Table};
use crate::error::{DdlError, DdlResult};
use crate::expr::{Condition, Func, SqlExpr, fill_placeholders};
use crate::schema_editor::SchemaEditor;
use crate::types::{DeferrableOption, IntoTriggerEvent, TriggerEvent};

const CREATE_TEMPLATE: &str = "CREATE CONSTRAINT TRIGGER %(name)s\n\
	AFTER %(events)s ON %(table)s%(deferrable)s\n\
	FOR EACH ROW %(condition)s\n\
	EXECUTE PROCEDURE %(procedure)s";

const DELETE_TEMPLATE: &str = "DROP TRIGGER %(name)s ON %(table)s";

/// A declarative PostgreSQL constraint trigger.
///
/// Immutable after construction. Equality is structural, with the event
/// collection compared as a set (declaration order is preserved for SQL
/// emission but ignored when diffing).
///
/// # Examples
///
/// ```rust
/// use reinhardt_pg_ddl::prelude::*;
///
/// let trigger = ConstraintTrigger::new(
///     "balance_check",
///     [TriggerEvent::Insert, TriggerEvent::Update],
///     Func::new("enforce_balance"),
/// )?
/// .with_deferrable(DeferrableOption::Deferred);
///
/// let editor = PostgresSchemaEditor::new();
/// let sql = trigger.create_sql("accounts", &editor).to_string();
/// assert!(sql.starts_with("CREATE CONSTRAINT TRIGGER \"balance_check\""));
/// # Ok::<(), reinhardt_pg_ddl::DdlError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintTrigger {
	name: String,
	events: Vec<TriggerEvent>,
	function: Func,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	condition: Option<Condition>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	deferrable: Option<DeferrableOption>,
}

impl ConstraintTrigger {
	/// Deconstruction path identifying this definition type.
	pub const PATH: &'static str = "reinhardt_pg_ddl::ConstraintTrigger";

	/// Declare a constraint trigger firing after `events` and executing
	/// `function`.
	///
	/// Events are accepted as [`TriggerEvent`] values or case-insensitive
	/// strings and normalized to canonical form; declaration order and
	/// duplicates are preserved. Fails with [`DdlError::EmptyEvents`] when
	/// the collection is empty.
	pub fn new<I, E>(name: impl Into<String>, events: I, function: Func) -> DdlResult<Self>
	where
		I: IntoIterator<Item = E>,
		E: IntoTriggerEvent,
	{
		let events = events
			.into_iter()
			.map(IntoTriggerEvent::into_trigger_event)
			.collect::<DdlResult<Vec<_>>>()?;
		if events.is_empty() {
			return Err(DdlError::EmptyEvents);
		}

		Ok(Self {
			name: name.into(),
			events,
			function,
			condition: None,
			deferrable: None,
		})
	}

	/// Restrict the trigger to rows matching `condition`.
	pub fn with_condition(mut self, condition: Condition) -> Self {
		self.condition = Some(condition);
		self
	}

	/// Set the constraint timing mode.
	pub fn with_deferrable(mut self, deferrable: DeferrableOption) -> Self {
		self.deferrable = Some(deferrable);
		self
	}

	/// The trigger name, unique within a database schema.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The normalized firing events, in declaration order.
	pub fn events(&self) -> &[TriggerEvent] {
		&self.events
	}

	/// The procedure-call expression the trigger executes.
	pub fn function(&self) -> &Func {
		&self.function
	}

	/// The optional row-filter condition.
	pub fn condition(&self) -> Option<&Condition> {
		self.condition.as_ref()
	}

	/// The optional constraint timing mode.
	pub fn deferrable(&self) -> Option<DeferrableOption> {
		self.deferrable
	}

	fn condition_sql(&self, schema_editor: &dyn SchemaEditor) -> String {
		match &self.condition {
			None => String::new(),
			Some(condition) => {
				let (sql, params) = condition.as_sql();
				format!("WHEN ({})", fill_placeholders(&sql, &params, schema_editor))
			}
		}
	}

	fn procedure_sql(&self, schema_editor: &dyn SchemaEditor) -> String {
		let (sql, params) = self.function.as_sql();
		fill_placeholders(&sql, &params, schema_editor)
	}

	/// Render the CREATE CONSTRAINT TRIGGER statement for `table`.
	pub fn create_sql(&self, table: &str, schema_editor: &dyn SchemaEditor) -> Statement {
		debug!(trigger = %self.name, table, "rendering CREATE CONSTRAINT TRIGGER");
		let table = Table::new(table, schema_editor);
		let events = self
			.events
			.iter()
			.map(TriggerEvent::as_str)
			.collect::<Vec<_>>()
			.join(" OR ");

		Statement::new(CREATE_TEMPLATE)
			.part("name", schema_editor.quote_name(&self.name))
			.part("events", events)
			.part("table", &table)
			.part("condition", self.condition_sql(schema_editor))
			.part("deferrable", schema_editor.deferrable_sql(self.deferrable))
			.part("procedure", self.procedure_sql(schema_editor))
	}

	/// Render the DROP TRIGGER statement for `table`.
	pub fn remove_sql(&self, table: &str, schema_editor: &dyn SchemaEditor) -> Statement {
		debug!(trigger = %self.name, table, "rendering DROP TRIGGER");
		Statement::new(DELETE_TEMPLATE)
			.part("name", schema_editor.quote_name(&self.name))
			.part("table", Table::new(table, schema_editor))
	}

	/// Serialize to a reconstruction recipe for migration diffing.
	///
	/// Unset `condition`/`deferrable` fields are omitted from the recipe so
	/// a default and an explicit `None` diff as identical.
	pub fn deconstruct(&self) -> DdlResult<(&'static str, serde_json::Value)> {
		Ok((Self::PATH, serde_json::to_value(self)?))
	}

	/// Rebuild a trigger from a [`deconstruct`](Self::deconstruct) recipe.
	pub fn reconstruct(kwargs: serde_json::Value) -> DdlResult<Self> {
		Ok(serde_json::from_value(kwargs)?)
	}
}

impl PartialEq for ConstraintTrigger {
	fn eq(&self, other: &Self) -> bool {
		let events: BTreeSet<TriggerEvent> = self.events.iter().copied().collect();
		let other_events: BTreeSet<TriggerEvent> = other.events.iter().copied().collect();
		self.name == other.name
			&& events == other_events
			&& self.function == other.function
			&& self.condition == other.condition
			&& self.deferrable == other.deferrable
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema_editor::PostgresSchemaEditor;
	use rstest::rstest;

	fn trigger(events: &[TriggerEvent]) -> ConstraintTrigger {
		ConstraintTrigger::new("my_trigger", events, Func::new("LOWER")).unwrap()
	}

	#[rstest]
	fn test_events_normalized_from_strings() {
		// Arrange
		let trigger =
			ConstraintTrigger::new("t", ["update", "Insert"], Func::new("f")).unwrap();

		// Assert
		assert_eq!(
			trigger.events(),
			&[TriggerEvent::Update, TriggerEvent::Insert]
		);
	}

	#[rstest]
	fn test_empty_events_fail_construction() {
		let err = ConstraintTrigger::new(
			"t",
			Vec::<TriggerEvent>::new(),
			Func::new("f"),
		)
		.unwrap_err();
		assert!(matches!(err, DdlError::EmptyEvents));
	}

	#[rstest]
	fn test_equality_ignores_event_order() {
		let a = trigger(&[TriggerEvent::Insert, TriggerEvent::Delete]);
		let b = trigger(&[TriggerEvent::Delete, TriggerEvent::Insert]);
		assert_eq!(a, b);
	}

	#[rstest]
	fn test_equality_distinguishes_condition() {
		let a = trigger(&[TriggerEvent::Insert]);
		let b = trigger(&[TriggerEvent::Insert]).with_condition(Condition::raw("1 = 1"));
		assert_ne!(a, b);
	}

	#[rstest]
	fn test_remove_sql_renders_drop_template() {
		let editor = PostgresSchemaEditor::new();
		let sql = trigger(&[TriggerEvent::Insert])
			.remove_sql("accounts", &editor)
			.to_string();
		assert_eq!(sql, "DROP TRIGGER \"my_trigger\" ON \"accounts\"");
	}
}
