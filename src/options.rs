//! Normalization of free-form command options into a flat CLI string.
//!
//! Callers can hand options over as a raw string, a list of arguments, or an
//! ordered set of flags (the "object" form, usually a JSON object).

use serde_json::Value;

/// Value of a single entry in the flags form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
	/// `true` emits the bare flag, `false` omits it.
	Switch(bool),
	/// Emits `flag value`.
	Value(String),
	/// Emits `flag value` once per element.
	Many(Vec<String>),
}

/// Free-form options appended after a subcommand keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommandOptions {
	#[default]
	None,
	/// Used verbatim; the caller owns quoting.
	Raw(String),
	/// Joined with spaces, each item quoted when needed.
	List(Vec<String>),
	/// Ordered flag name to value pairs.
	Flags(Vec<(String, FlagValue)>),
}

impl CommandOptions {
	/// Start an empty flags set.
	pub fn flags() -> Self {
		Self::Flags(Vec::new())
	}

	/// Append a flag entry. Called on any form other than flags, this starts a
	/// new flags set in its place.
	pub fn flag(self, key: impl Into<String>, value: impl Into<FlagValue>) -> Self {
		let mut entries = match self {
			Self::Flags(entries) => entries,
			_ => Vec::new(),
		};
		entries.push((key.into(), value.into()));
		Self::Flags(entries)
	}
}

/// Render options as the flat string placed after the subcommand.
pub fn normalize(options: &CommandOptions) -> String {
	match options {
		CommandOptions::None => String::new(),
		CommandOptions::Raw(raw) => raw.clone(),
		CommandOptions::List(items) => items
			.iter()
			.map(|item| quote(item))
			.collect::<Vec<_>>()
			.join(" "),
		CommandOptions::Flags(entries) => {
			let mut parts = Vec::new();
			for (key, value) in entries {
				let flag = flag_name(key);
				match value {
					FlagValue::Switch(true) => parts.push(flag),
					FlagValue::Switch(false) => {}
					FlagValue::Value(v) => parts.push(format!("{flag} {}", quote(v))),
					FlagValue::Many(values) => {
						parts.extend(values.iter().map(|v| format!("{flag} {}", quote(v))));
					}
				}
			}
			parts.join(" ")
		}
	}
}

fn flag_name(key: &str) -> String {
	if key.starts_with('-') {
		key.to_owned()
	} else if key.chars().count() == 1 {
		format!("-{key}")
	} else {
		format!("--{key}")
	}
}

/// Quote a value for a POSIX shell when it contains anything outside a safe set.
pub fn quote(value: &str) -> String {
	let safe = !value.is_empty()
		&& value
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || "-_./=:@,+%^".contains(c));
	if safe {
		value.to_owned()
	} else {
		format!("'{}'", value.replace('\'', r"'\''"))
	}
}

impl From<()> for CommandOptions {
	fn from(_: ()) -> Self {
		Self::None
	}
}

impl From<&str> for CommandOptions {
	fn from(raw: &str) -> Self {
		Self::Raw(raw.to_owned())
	}
}

impl From<String> for CommandOptions {
	fn from(raw: String) -> Self {
		Self::Raw(raw)
	}
}

impl From<&String> for CommandOptions {
	fn from(raw: &String) -> Self {
		Self::Raw(raw.clone())
	}
}

impl From<Vec<String>> for CommandOptions {
	fn from(items: Vec<String>) -> Self {
		Self::List(items)
	}
}

impl From<Vec<&str>> for CommandOptions {
	fn from(items: Vec<&str>) -> Self {
		Self::List(items.into_iter().map(str::to_owned).collect())
	}
}

impl From<&[&str]> for CommandOptions {
	fn from(items: &[&str]) -> Self {
		Self::List(items.iter().map(|s| (*s).to_owned()).collect())
	}
}

impl<const N: usize> From<[&str; N]> for CommandOptions {
	fn from(items: [&str; N]) -> Self {
		Self::List(items.iter().map(|s| (*s).to_owned()).collect())
	}
}

impl<T: Into<CommandOptions>> From<Option<T>> for CommandOptions {
	fn from(options: Option<T>) -> Self {
		options.map(Into::into).unwrap_or_default()
	}
}

impl From<Value> for CommandOptions {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::None,
			Value::String(s) => Self::Raw(s),
			Value::Bool(b) => Self::Raw(b.to_string()),
			Value::Number(n) => Self::Raw(n.to_string()),
			Value::Array(items) => Self::List(items.into_iter().map(value_text).collect()),
			Value::Object(map) => Self::Flags(
				map.into_iter()
					.map(|(key, value)| (key, FlagValue::from(value)))
					.collect(),
			),
		}
	}
}

impl From<bool> for FlagValue {
	fn from(on: bool) -> Self {
		Self::Switch(on)
	}
}

impl From<&str> for FlagValue {
	fn from(value: &str) -> Self {
		Self::Value(value.to_owned())
	}
}

impl From<String> for FlagValue {
	fn from(value: String) -> Self {
		Self::Value(value)
	}
}

impl From<Vec<&str>> for FlagValue {
	fn from(values: Vec<&str>) -> Self {
		Self::Many(values.into_iter().map(str::to_owned).collect())
	}
}

impl From<Vec<String>> for FlagValue {
	fn from(values: Vec<String>) -> Self {
		Self::Many(values)
	}
}

impl From<Value> for FlagValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Switch(false),
			Value::Bool(b) => Self::Switch(b),
			Value::Array(items) => Self::Many(items.into_iter().map(value_text).collect()),
			other => Self::Value(value_text(other)),
		}
	}
}

fn value_text(value: Value) -> String {
	match value {
		Value::String(s) => s,
		other => other.to_string(),
	}
}
