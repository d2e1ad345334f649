//! Error types for DDL definition construction and deconstruction.

use thiserror::Error;

/// Errors produced while building or deconstructing DDL definitions.
#[derive(Debug, Error)]
pub enum DdlError {
	/// A constraint trigger was declared without any firing event.
	#[error("constraint trigger events must contain at least one TriggerEvent")]
	EmptyEvents,

	/// A string event name outside the INSERT/UPDATE/DELETE vocabulary.
	#[error("unknown trigger event: {0}")]
	UnknownEvent(String),

	/// Serialization failure while deconstructing or reconstructing a definition.
	#[error("deconstruction failed: {0}")]
	Deconstruct(#[from] serde_json::Error),
}

/// Result alias for DDL definition operations.
pub type DdlResult<T> = Result<T, DdlError>;
