use super::Feature;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kit {
	pub id: String,
	pub name: String,
	pub description: String,
	#[serde(rename = "type")]
	pub kind: KitType,
	pub armor: Vec<String>,
	pub weapon: Vec<String>,
	pub stamina: i32,
	pub speed: i32,
	pub stability: i32,
	pub disengage: i32,
	pub features: Vec<Feature>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum KitType {
	#[default]
	Standard,
	Stormwight,
}

impl KitType {
	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Standard => "Standard",
			Self::Stormwight => "Stormwight",
		}
	}
}

impl Kit {
	pub fn new(name: impl Into<String>, kind: KitType) -> Self {
		Self {
			id: crate::utility::guid(),
			name: name.into(),
			kind,
			..Default::default()
		}
	}
}
