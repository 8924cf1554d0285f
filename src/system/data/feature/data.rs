use super::Feature;
use crate::system::data::{Ability, DamageModifier, FeatureField, Kit, KitType, Size, SkillList};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FeatureAbilityData {
	pub ability: Ability,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureBonusData {
	pub field: FeatureField,
	pub value: i32,
	#[serde(default)]
	pub value_per_level: i32,
}

impl FeatureBonusData {
	pub fn value_at(&self, level: u32) -> i32 {
		let levels = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
		self.value.saturating_add(self.value_per_level.saturating_mul(levels))
	}
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FeatureChoiceData {
	pub options: Vec<ChoiceOption>,
	pub count: usize,
	#[serde(default)]
	pub selected: Vec<Feature>,
}

/// A candidate for a [`FeatureChoiceData`]. The value is the option's weight,
/// i.e. how much of the choice's count picking it consumes in the rule text.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ChoiceOption {
	pub feature: Feature,
	pub value: u32,
}

impl ChoiceOption {
	pub fn new(feature: Feature, value: u32) -> Self {
		Self { feature, value }
	}
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureClassAbilityData {
	pub cost: u32,
	pub count: usize,
	#[serde(rename = "selectedIDs", default)]
	pub selected_ids: Vec<String>,
}

impl FeatureClassAbilityData {
	/// The class abilities which can fill this pick.
	pub fn candidates<'a>(&self, abilities: &'a [Ability]) -> Vec<&'a Ability> {
		abilities.iter().filter(|ability| ability.cost == self.cost).collect()
	}
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FeatureDamageModifierData {
	pub modifiers: Vec<DamageModifier>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FeatureKitData {
	pub types: Vec<KitType>,
	pub count: usize,
	#[serde(default)]
	pub selected: Vec<Kit>,
}

impl FeatureKitData {
	pub fn allows(&self, kit: &Kit) -> bool {
		self.types.is_empty() || self.types.contains(&kit.kind)
	}
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FeatureLanguageData {
	pub options: Vec<String>,
	pub count: usize,
	#[serde(default)]
	pub selected: Vec<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FeatureMultipleData {
	pub features: Vec<Feature>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FeatureSizeData {
	pub size: Size,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSkillData {
	#[serde(default)]
	pub options: Vec<String>,
	#[serde(default)]
	pub list_options: Vec<SkillList>,
	pub count: usize,
	#[serde(default)]
	pub selected: Vec<String>,
}

impl FeatureSkillData {
	/// Every skill which can be picked: the named options followed by the skills of each listed category.
	pub fn candidates(&self) -> Vec<String> {
		let mut candidates = self.options.clone();
		for list in &self.list_options {
			for skill in list.skills() {
				if !candidates.iter().any(|existing| existing == skill) {
					candidates.push((*skill).to_owned());
				}
			}
		}
		candidates
	}
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FeatureSubclassData {
	pub category: String,
	pub count: usize,
	#[serde(default)]
	pub selected: Vec<Feature>,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn bonus_scales_with_level() {
		let bonus = FeatureBonusData {
			field: FeatureField::Stamina,
			value: 9,
			value_per_level: 3,
		};
		assert_eq!(bonus.value_at(1), 9);
		assert_eq!(bonus.value_at(4), 18);
		assert_eq!(bonus.value_at(0), 9);
	}

	#[test]
	fn bonus_saturates_at_huge_levels() {
		let bonus = FeatureBonusData {
			field: FeatureField::Stamina,
			value: 9,
			value_per_level: 2,
		};
		assert_eq!(bonus.value_at(3_000_000_000), i32::MAX);
	}

	#[test]
	fn skill_candidates_merge_lists() {
		let data = FeatureSkillData {
			options: vec!["Magic".into(), "Sneak".into()],
			list_options: vec![SkillList::Lore],
			count: 1,
			selected: vec![],
		};
		let candidates = data.candidates();
		assert_eq!(&candidates[..2], &["Magic".to_owned(), "Sneak".to_owned()]);
		assert_eq!(candidates.iter().filter(|s| *s == "Magic").count(), 1);
		assert!(candidates.contains(&"Timescape".to_owned()));
	}

	#[test]
	fn kit_filter() {
		let data = FeatureKitData {
			types: vec![KitType::Stormwight],
			count: 1,
			selected: vec![],
		};
		assert!(!data.allows(&Kit::new("Panther", KitType::Standard)));
		assert!(data.allows(&Kit::new("Boren", KitType::Stormwight)));
	}
}
