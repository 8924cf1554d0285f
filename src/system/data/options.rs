use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

/// User preferences for how hero sheets are displayed.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
	pub show_skills_in_groups: bool,
	pub show_free_strikes: bool,
	pub show_standard_abilities: bool,
	pub dim_unavailable_abilities: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			show_skills_in_groups: false,
			show_free_strikes: true,
			show_standard_abilities: true,
			dim_unavailable_abilities: false,
		}
	}
}

/// A single on/off preference of [`Options`].
#[derive(Debug, EnumSetType)]
pub enum OptionFlag {
	SkillsInGroups,
	FreeStrikes,
	StandardAbilities,
	DimUnavailableAbilities,
}

impl OptionFlag {
	pub fn display_name(&self) -> &'static str {
		match self {
			Self::SkillsInGroups => "Show skills in groups",
			Self::FreeStrikes => "Show free strikes",
			Self::StandardAbilities => "Show standard abilities",
			Self::DimUnavailableAbilities => "Dim unavailable abilities",
		}
	}
}

impl Options {
	pub fn flag(&self, flag: OptionFlag) -> bool {
		match flag {
			OptionFlag::SkillsInGroups => self.show_skills_in_groups,
			OptionFlag::FreeStrikes => self.show_free_strikes,
			OptionFlag::StandardAbilities => self.show_standard_abilities,
			OptionFlag::DimUnavailableAbilities => self.dim_unavailable_abilities,
		}
	}

	/// Returns a copy with the flag set to `value`, or flipped when the value is unknown.
	pub fn with_flag(&self, flag: OptionFlag, value: Option<bool>) -> Self {
		let mut options = self.clone();
		let value = value.unwrap_or(!options.flag(flag));
		let field = match flag {
			OptionFlag::SkillsInGroups => &mut options.show_skills_in_groups,
			OptionFlag::FreeStrikes => &mut options.show_free_strikes,
			OptionFlag::StandardAbilities => &mut options.show_standard_abilities,
			OptionFlag::DimUnavailableAbilities => &mut options.dim_unavailable_abilities,
		};
		*field = value;
		options
	}
}
