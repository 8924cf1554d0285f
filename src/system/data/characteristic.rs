use enum_map::Enum;
use enumset::EnumSetType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, EnumSetType, Enum, Serialize, Deserialize)]
pub enum Characteristic {
	Might,
	Agility,
	Reason,
	Intuition,
	Presence,
}

impl Characteristic {
	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Might => "Might",
			Self::Agility => "Agility",
			Self::Reason => "Reason",
			Self::Intuition => "Intuition",
			Self::Presence => "Presence",
		}
	}

	pub fn abbreviation(&self) -> &'static str {
		match self {
			Self::Might => "M",
			Self::Agility => "A",
			Self::Reason => "R",
			Self::Intuition => "I",
			Self::Presence => "P",
		}
	}

	pub fn description(&self) -> &'static str {
		match self {
			Self::Might => "Raw physical strength and toughness.",
			Self::Agility => "Coordination, dexterity and speed.",
			Self::Reason => "Logical thinking and education.",
			Self::Intuition => "Awareness, instinct and empathy.",
			Self::Presence => "Force of personality and charisma.",
		}
	}
}

impl ToString for Characteristic {
	fn to_string(&self) -> String {
		self.display_name().to_owned()
	}
}

impl FromStr for Characteristic {
	type Err = crate::utility::NotInList;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Might" => Ok(Self::Might),
			"Agility" => Ok(Self::Agility),
			"Reason" => Ok(Self::Reason),
			"Intuition" => Ok(Self::Intuition),
			"Presence" => Ok(Self::Presence),
			_ => Err(crate::utility::NotInList(
				s.into(),
				vec!["Might", "Agility", "Reason", "Intuition", "Presence"],
			)),
		}
	}
}
