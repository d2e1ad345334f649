//! Function definition tests
//!
//! Tests for CREATE/DROP FUNCTION rendering including:
//! - Template assembly (single-line skeleton, body newlines preserved)
//! - Body trimming and %(table)s placeholder substitution
//! - Trigger-function return-type forcing
//! - Clone independence and deconstruction round trips

use rstest::rstest;

use reinhardt_pg_ddl::prelude::*;

const PLPGSQL_BODY: &str = "
DECLARE
BEGIN
    IF (TG_OP = 'DELETE') THEN
        RETURN OLD;
    END IF;
    RETURN NEW;
END;
";

fn editor() -> PostgresSchemaEditor {
	PostgresSchemaEditor::new()
}

#[rstest]
fn test_create_sql_matches_fixed_template() {
	// Arrange
	let function =
		PostgresFunctionDefinition::new("my_function", "BEGIN RETURN NEW; END;", "trigger");

	// Act
	let sql = function.create_sql("accounts", &editor()).to_string();

	// Assert
	assert_eq!(
		sql,
		"CREATE FUNCTION my_function() RETURNS trigger AS $$ BEGIN RETURN NEW; END; $$ LANGUAGE plpgsql;"
	);
}

#[rstest]
fn test_body_trimmed_but_internal_newlines_preserved() {
	let function = PostgresFunctionDefinition::new("f", PLPGSQL_BODY, "trigger");

	assert!(function.body().starts_with("DECLARE"));
	assert!(function.body().ends_with("END;"));

	let sql = function.create_sql("accounts", &editor()).to_string();
	assert!(sql.contains("DECLARE\nBEGIN"), "sql was: {sql}");
	assert!(sql.contains("RETURN OLD;"), "sql was: {sql}");
}

#[rstest]
fn test_body_table_placeholder_substituted_with_quoted_name() {
	let function = PostgresFunctionDefinition::new(
		"f",
		"BEGIN PERFORM 1 FROM %(table)s; RETURN NEW; END;",
		"trigger",
	);

	let sql = function.create_sql("accounts", &editor()).to_string();

	assert!(
		sql.contains("PERFORM 1 FROM \"accounts\";"),
		"sql was: {sql}"
	);
}

#[rstest]
fn test_body_without_placeholder_ignores_table_argument() {
	let function = PostgresFunctionDefinition::new("f", "BEGIN RETURN NEW; END;", "trigger");

	let for_accounts = function.create_sql("accounts", &editor()).to_string();
	let for_orders = function.create_sql("orders", &editor()).to_string();

	assert_eq!(for_accounts, for_orders);
}

#[rstest]
fn test_language_can_be_overridden() {
	let function =
		PostgresFunctionDefinition::new("f", "SELECT 1", "integer").with_language("sql");

	let sql = function.create_sql("accounts", &editor()).to_string();

	assert!(sql.ends_with("$$ LANGUAGE sql;"), "sql was: {sql}");
}

#[rstest]
fn test_trigger_function_definition_forces_trigger_returns() {
	let function = PostgresTriggerFunctionDefinition::new("f", PLPGSQL_BODY);
	assert_eq!(function.returns(), "trigger");
}

#[rstest]
fn test_remove_sql_renders_exact_drop_template() {
	let function = PostgresFunctionDefinition::new("my_function", "BEGIN END;", "trigger");
	assert_eq!(function.remove_sql().to_string(), "DROP FUNCTION my_function()");
}

#[rstest]
fn test_clone_yields_equal_independent_instance() {
	// Arrange
	let original = PostgresFunctionDefinition::new("f", "BEGIN END;", "integer");

	// Act
	let cloned = original.clone();
	let diverged = original.clone().with_language("sql");

	// Assert
	assert_eq!(cloned, original);
	assert_ne!(diverged, original);
	assert_eq!(original.language(), "plpgsql");
}

#[rstest]
fn test_deconstruct_serializes_all_four_attributes() {
	let function = PostgresFunctionDefinition::new("f", "BEGIN END;", "trigger");

	let (path, kwargs) = function.deconstruct().unwrap();

	assert_eq!(path, PostgresFunctionDefinition::PATH);
	let object = kwargs.as_object().unwrap();
	assert_eq!(object.len(), 4);
	assert_eq!(object["name"], "f");
	assert_eq!(object["body"], "BEGIN END;");
	assert_eq!(object["returns"], "trigger");
	assert_eq!(object["language"], "plpgsql");
}

#[rstest]
fn test_deconstruct_reconstruct_round_trip_yields_equal_function() {
	let function = PostgresFunctionDefinition::new("f", PLPGSQL_BODY, "trigger")
		.with_language("plpgsql");

	let (_, kwargs) = function.deconstruct().unwrap();
	let rebuilt = PostgresFunctionDefinition::reconstruct(kwargs).unwrap();

	assert_eq!(rebuilt, function);
}

#[rstest]
fn test_as_func_plugs_into_constraint_trigger() {
	let function = PostgresTriggerFunctionDefinition::new("enforce_balance", PLPGSQL_BODY);
	let trigger = ConstraintTrigger::new(
		"balance_check",
		[TriggerEvent::Insert, TriggerEvent::Update, TriggerEvent::Delete],
		function.as_func(),
	)
	.unwrap()
	.with_deferrable(DeferrableOption::Deferred);

	let sql = trigger.create_sql("accounts", &editor()).to_string();

	assert!(
		sql.contains("EXECUTE PROCEDURE enforce_balance()"),
		"sql was: {sql}"
	);
}
