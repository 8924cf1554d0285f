use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

/// The categories skills are grouped into.
/// A skill feature can offer "any skill from these lists" in addition to named skills.
#[derive(Debug, EnumSetType, Serialize, Deserialize)]
pub enum SkillList {
	Crafting,
	Exploration,
	Interpersonal,
	Intrigue,
	Lore,
}

impl SkillList {
	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Crafting => "Crafting",
			Self::Exploration => "Exploration",
			Self::Interpersonal => "Interpersonal",
			Self::Intrigue => "Intrigue",
			Self::Lore => "Lore",
		}
	}

	pub fn skills(&self) -> &'static [&'static str] {
		match self {
			Self::Crafting => &[
				"Alchemy", "Architecture", "Blacksmithing", "Carpentry", "Cooking",
				"Fletching", "Forgery", "Jewelry", "Mechanics", "Tailoring",
			],
			Self::Exploration => &[
				"Climb", "Drive", "Endurance", "Gymnastics", "Heal", "Jump",
				"Lift", "Navigate", "Ride", "Swim",
			],
			Self::Interpersonal => &[
				"Brag", "Empathize", "Flirt", "Gamble", "Handle Animals", "Interrogate",
				"Intimidate", "Lead", "Lie", "Music", "Perform", "Persuade", "Read Person",
			],
			Self::Intrigue => &[
				"Alertness", "Conceal Object", "Disguise", "Eavesdrop", "Escape Artist",
				"Hide", "Pick Lock", "Pick Pocket", "Sabotage", "Search", "Sneak", "Track",
			],
			Self::Lore => &[
				"Culture", "Criminal Underworld", "History", "Magic", "Monsters",
				"Nature", "Psionics", "Religion", "Rumors", "Society", "Strategy",
				"Timescape",
			],
		}
	}
}
