//! Declarative PostgreSQL DDL definitions for migration systems.
//!
//! This crate provides two small value-object abstractions that let an
//! application describe PostgreSQL-specific DDL objects and have a
//! migration executor create and drop them in lockstep with table
//! migrations:
//!
//! - **[`ConstraintTrigger`]**: a named constraint trigger bound to a table,
//!   with firing events, an optional row filter, an optional deferrability
//!   mode, and a procedure to invoke
//! - **[`PostgresFunctionDefinition`]**: a named SQL-language function with
//!   a body, return type, and implementation language (plus
//!   [`PostgresTriggerFunctionDefinition`] for the trigger-returning
//!   variant)
//!
//! Both are immutable after construction and side-effect free: they render
//! DDL text through a [`SchemaEditor`] quoting capability but never execute
//! it. Structural equality and the `deconstruct`/`reconstruct` pair serve
//! migration-graph diffing.
//!
//! # Example
//!
//! ```rust
//! use reinhardt_pg_ddl::prelude::*;
//!
//! let function = PostgresTriggerFunctionDefinition::new(
//!     "enforce_balance",
//!     "BEGIN RETURN NEW; END;",
//! );
//!
//! let trigger = ConstraintTrigger::new(
//!     "balance_check",
//!     [TriggerEvent::Insert, TriggerEvent::Update],
//!     function.as_func(),
//! )?
//! .with_deferrable(DeferrableOption::Deferred);
//!
//! let editor = PostgresSchemaEditor::new();
//! let create = trigger.create_sql("accounts", &editor).to_string();
//! assert!(create.contains("AFTER INSERT OR UPDATE ON \"accounts\""));
//! assert!(create.contains("EXECUTE PROCEDURE enforce_balance()"));
//! # Ok::<(), reinhardt_pg_ddl::DdlError>(())
//! ```

pub mod constraints;
pub mod ddl;
pub mod error;
pub mod expr;
pub mod functions;
pub mod schema_editor;
pub mod types;
pub mod value;

pub use constraints::ConstraintTrigger;
pub use ddl::{Statement, Table};
pub use error::{DdlError, DdlResult};
pub use expr::{Condition, Func, SqlExpr};
pub use functions::{
	DEFAULT_LANGUAGE, PostgresFunctionDefinition, PostgresTriggerFunctionDefinition,
};
pub use schema_editor::{PostgresSchemaEditor, SchemaEditor};
pub use types::{DeferrableOption, IntoTriggerEvent, TriggerEvent};
pub use value::Value;

/// Commonly used types, importable in one line.
pub mod prelude {
	pub use crate::constraints::ConstraintTrigger;
	pub use crate::ddl::Statement;
	pub use crate::error::{DdlError, DdlResult};
	pub use crate::expr::{Condition, Func, SqlExpr};
	pub use crate::functions::{
		PostgresFunctionDefinition, PostgresTriggerFunctionDefinition,
	};
	pub use crate::schema_editor::{PostgresSchemaEditor, SchemaEditor};
	pub use crate::types::{DeferrableOption, IntoTriggerEvent, TriggerEvent};
	pub use crate::value::Value;
}
