//! Core vocabulary shared by trigger and function definitions.
//!
//! - [`TriggerEvent`]: the closed set of firing events a constraint trigger
//!   may respond to
//! - [`DeferrableOption`]: PostgreSQL constraint timing modes
//! - [`IntoTriggerEvent`]: conversion trait accepting the symbolic value or
//!   a case-insensitive string naming it

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, DdlResult};

/// A firing event accepted by a constraint trigger.
///
/// The set is closed: PostgreSQL constraint triggers fire only on row-level
/// INSERT, UPDATE, and DELETE.
///
/// # Examples
///
/// ```rust
/// use reinhardt_pg_ddl::TriggerEvent;
///
/// let event: TriggerEvent = "update".parse().unwrap();
/// assert_eq!(event, TriggerEvent::Update);
/// assert_eq!(event.as_str(), "UPDATE");
/// ```
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum TriggerEvent {
	Insert,
	Update,
	Delete,
}

impl TriggerEvent {
	/// Canonical uppercase SQL form of the event.
	pub fn as_str(&self) -> &'static str {
		match self {
			TriggerEvent::Insert => "INSERT",
			TriggerEvent::Update => "UPDATE",
			TriggerEvent::Delete => "DELETE",
		}
	}
}

impl std::fmt::Display for TriggerEvent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TriggerEvent {
	type Err = DdlError;

	/// Case-insensitive parse of an event name.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"INSERT" => Ok(TriggerEvent::Insert),
			"UPDATE" => Ok(TriggerEvent::Update),
			"DELETE" => Ok(TriggerEvent::Delete),
			_ => Err(DdlError::UnknownEvent(s.to_owned())),
		}
	}
}

impl TryFrom<&str> for TriggerEvent {
	type Error = DdlError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// Conversion into a [`TriggerEvent`], accepting either the symbolic value
/// or a case-insensitive string naming it.
pub trait IntoTriggerEvent {
	fn into_trigger_event(self) -> DdlResult<TriggerEvent>;
}

impl IntoTriggerEvent for TriggerEvent {
	fn into_trigger_event(self) -> DdlResult<TriggerEvent> {
		Ok(self)
	}
}

impl IntoTriggerEvent for &TriggerEvent {
	fn into_trigger_event(self) -> DdlResult<TriggerEvent> {
		Ok(*self)
	}
}

impl IntoTriggerEvent for &str {
	fn into_trigger_event(self) -> DdlResult<TriggerEvent> {
		self.parse()
	}
}

impl IntoTriggerEvent for String {
	fn into_trigger_event(self) -> DdlResult<TriggerEvent> {
		self.parse()
	}
}

/// Deferrable constraint option for PostgreSQL.
///
/// Controls when a constraint trigger's check is performed relative to the
/// enclosing transaction.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DeferrableOption {
	/// DEFERRABLE INITIALLY IMMEDIATE
	Immediate,
	/// DEFERRABLE INITIALLY DEFERRED
	Deferred,
}

impl std::fmt::Display for DeferrableOption {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DeferrableOption::Immediate => write!(f, "DEFERRABLE INITIALLY IMMEDIATE"),
			DeferrableOption::Deferred => write!(f, "DEFERRABLE INITIALLY DEFERRED"),
		}
	}
}
