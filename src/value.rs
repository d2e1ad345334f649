//! SQL parameter values.
//!
//! Expressions carry their parameters as [`Value`]s; when a definition is
//! rendered to DDL text the schema editor substitutes each parameter as a
//! quoted literal.

use serde::{Deserialize, Serialize};

/// A literal SQL parameter value.
///
/// Only the types that can appear in a trigger condition or procedure call
/// are represented. `Null` renders as SQL `NULL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
	/// Boolean value
	Bool(bool),
	/// 32-bit signed integer
	Int(i32),
	/// 64-bit signed integer
	BigInt(i64),
	/// 64-bit floating point
	Double(f64),
	/// String value
	String(String),
	/// SQL NULL
	Null,
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::BigInt(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Double(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}
