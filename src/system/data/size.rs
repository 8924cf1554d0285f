use serde::{Deserialize, Serialize};

/// The space a creature occupies: a number of squares per side, plus a modifier
/// used to distinguish the sizes which all occupy a single square.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Size {
	pub value: u32,
	#[serde(rename = "mod", default)]
	pub modifier: SizeModifier,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum SizeModifier {
	#[serde(rename = "T")]
	Tiny,
	#[serde(rename = "S")]
	Small,
	#[serde(rename = "M")]
	Medium,
	#[serde(rename = "L")]
	Large,
	#[default]
	#[serde(rename = "")]
	None,
}

impl SizeModifier {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Tiny => "T",
			Self::Small => "S",
			Self::Medium => "M",
			Self::Large => "L",
			Self::None => "",
		}
	}
}

impl Default for Size {
	fn default() -> Self {
		Self {
			value: 1,
			modifier: SizeModifier::Medium,
		}
	}
}

impl ToString for Size {
	fn to_string(&self) -> String {
		format!("{}{}", self.value, self.modifier.as_str())
	}
}
