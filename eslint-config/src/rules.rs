use super::*;

/// The enforcement setting for a linting rule.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleEnforcement {
	/// Disables the rule.
	Off,
	/// Violating the rule triggers a warning.
	Warn,
	/// Violating the rule causes an error.
	Error,
}

impl RuleEnforcement {
	/// Parses either the named form (`"warn"`) or the numeric form (`1`) of a severity.
	pub fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::String(name) => match name.as_str() {
				"off" => Some(Self::Off),
				"warn" => Some(Self::Warn),
				"error" => Some(Self::Error),
				_ => None,
			},
			Value::Number(number) => match number.as_u64() {
				Some(0) => Some(Self::Off),
				Some(1) => Some(Self::Warn),
				Some(2) => Some(Self::Error),
				_ => None,
			},
			_ => None,
		}
	}

	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Off => "off",
			Self::Warn => "warn",
			Self::Error => "error",
		}
	}
}

/// The settings for an individual rule.
///
/// Serialized as a single severity (`"off"`) when there are no options, or as an array with the severity
/// followed by the rule-specific options (`["error", "always", { "ignorePackages": true }]`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Value", into = "Value")]
pub struct RuleSetting {
	pub level: RuleEnforcement,
	pub options: Vec<Value>,
}

impl RuleSetting {
	pub const fn new(level: RuleEnforcement) -> Self {
		Self {
			level,
			options: Vec::new(),
		}
	}

	pub const fn off() -> Self {
		Self::new(RuleEnforcement::Off)
	}

	pub const fn warn() -> Self {
		Self::new(RuleEnforcement::Warn)
	}

	pub const fn error() -> Self {
		Self::new(RuleEnforcement::Error)
	}

	/// Adds an option after the severity.
	#[must_use]
	pub fn with_option(mut self, option: impl Into<Value>) -> Self {
		self.options.push(option.into());
		self
	}
}

impl From<RuleEnforcement> for RuleSetting {
	fn from(value: RuleEnforcement) -> Self {
		Self::new(value)
	}
}

impl TryFrom<Value> for RuleSetting {
	type Error = String;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		let invalid = || format!("Invalid rule setting: {value}");

		match &value {
			Value::Array(items) => {
				let (level, options) = items.split_first().ok_or_else(invalid)?;

				Ok(Self {
					level: RuleEnforcement::from_value(level).ok_or_else(invalid)?,
					options: options.to_vec(),
				})
			}
			other => Ok(Self::new(
				RuleEnforcement::from_value(other).ok_or_else(invalid)?,
			)),
		}
	}
}

impl From<RuleSetting> for Value {
	fn from(value: RuleSetting) -> Self {
		let level = Self::String(value.level.as_str().to_string());

		if value.options.is_empty() {
			level
		} else {
			let mut items = Vec::with_capacity(value.options.len() + 1);
			items.push(level);
			items.extend(value.options);
			Self::Array(items)
		}
	}
}
