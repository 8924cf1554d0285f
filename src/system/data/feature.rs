use super::{Ability, DamageModifier, FeatureField, KitType, Size, SkillList};
use serde::{Deserialize, Serialize};

mod data;
pub use data::*;
mod selection;
pub use selection::*;

/// A named rule-effect attached to a hero.
///
/// The payload describes what the feature grants, or the decision the player
/// has to make. Payloads are immutable after construction except for their
/// selections, which are changed through [`Selection`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Feature {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
	/// If this feature is a decision point the player needs to resolve.
	#[serde(default)]
	pub choice: bool,
	#[serde(flatten)]
	pub kind: FeatureKind,
}

/// The closed set of feature payloads. Serialized as `type` + `data` fields on the owning [`Feature`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FeatureKind {
	Text,
	Ability(FeatureAbilityData),
	Bonus(FeatureBonusData),
	Choice(FeatureChoiceData),
	#[serde(rename = "Class Ability")]
	ClassAbility(FeatureClassAbilityData),
	#[serde(rename = "Damage Modifier")]
	DamageModifier(FeatureDamageModifierData),
	Kit(FeatureKitData),
	Language(FeatureLanguageData),
	Multiple(FeatureMultipleData),
	Size(FeatureSizeData),
	Skill(FeatureSkillData),
	Subclass(FeatureSubclassData),
}

impl FeatureKind {
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Text => "Text",
			Self::Ability(_) => "Ability",
			Self::Bonus(_) => "Bonus",
			Self::Choice(_) => "Choice",
			Self::ClassAbility(_) => "Class Ability",
			Self::DamageModifier(_) => "Damage Modifier",
			Self::Kit(_) => "Kit",
			Self::Language(_) => "Language",
			Self::Multiple(_) => "Multiple",
			Self::Size(_) => "Size",
			Self::Skill(_) => "Skill",
			Self::Subclass(_) => "Subclass",
		}
	}

	/// Returns true for the kinds which carry a player selection.
	pub fn is_choice(&self) -> bool {
		match self {
			Self::Choice(_)
			| Self::ClassAbility(_)
			| Self::Kit(_)
			| Self::Language(_)
			| Self::Skill(_)
			| Self::Subclass(_) => true,
			Self::Text
			| Self::Ability(_)
			| Self::Bonus(_)
			| Self::DamageModifier(_)
			| Self::Multiple(_)
			| Self::Size(_) => false,
		}
	}
}

impl Feature {
	pub fn new(name: impl Into<String>, description: impl Into<String>, kind: FeatureKind) -> Self {
		Self {
			id: crate::utility::guid(),
			name: name.into(),
			description: description.into(),
			choice: kind.is_choice(),
			kind,
		}
	}

	pub fn text(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self::new(name, description, FeatureKind::Text)
	}

	pub fn ability(ability: Ability) -> Self {
		let name = ability.name.clone();
		let description = ability.description.clone();
		Self::new(name, description, FeatureKind::Ability(FeatureAbilityData { ability }))
	}

	pub fn bonus(name: impl Into<String>, field: FeatureField, value: i32, value_per_level: i32) -> Self {
		let kind = FeatureKind::Bonus(FeatureBonusData {
			field,
			value,
			value_per_level,
		});
		Self::new(name, "", kind)
	}

	pub fn choice(name: impl Into<String>, options: Vec<ChoiceOption>, count: usize) -> Self {
		let kind = FeatureKind::Choice(FeatureChoiceData {
			options,
			count,
			selected: Vec::new(),
		});
		Self::new(name, "", kind)
	}

	pub fn class_ability(name: impl Into<String>, cost: u32, count: usize) -> Self {
		let kind = FeatureKind::ClassAbility(FeatureClassAbilityData {
			cost,
			count,
			selected_ids: Vec::new(),
		});
		Self::new(name, "", kind)
	}

	pub fn damage_modifier(name: impl Into<String>, modifiers: Vec<DamageModifier>) -> Self {
		let kind = FeatureKind::DamageModifier(FeatureDamageModifierData { modifiers });
		Self::new(name, "", kind)
	}

	pub fn kit(name: impl Into<String>, types: Vec<KitType>, count: usize) -> Self {
		let kind = FeatureKind::Kit(FeatureKitData {
			types,
			count,
			selected: Vec::new(),
		});
		Self::new(name, "", kind)
	}

	pub fn language(name: impl Into<String>, options: Vec<String>, count: usize) -> Self {
		let kind = FeatureKind::Language(FeatureLanguageData {
			options,
			count,
			selected: Vec::new(),
		});
		Self::new(name, "", kind)
	}

	pub fn multiple(name: impl Into<String>, features: Vec<Feature>) -> Self {
		Self::new(name, "", FeatureKind::Multiple(FeatureMultipleData { features }))
	}

	pub fn size(name: impl Into<String>, size: Size) -> Self {
		Self::new(name, "", FeatureKind::Size(FeatureSizeData { size }))
	}

	pub fn skill(
		name: impl Into<String>,
		options: Vec<String>,
		list_options: Vec<SkillList>,
		count: usize,
	) -> Self {
		let kind = FeatureKind::Skill(FeatureSkillData {
			options,
			list_options,
			count,
			selected: Vec::new(),
		});
		Self::new(name, "", kind)
	}

	pub fn subclass(name: impl Into<String>, category: impl Into<String>, count: usize) -> Self {
		let kind = FeatureKind::Subclass(FeatureSubclassData {
			category: category.into(),
			count,
			selected: Vec::new(),
		});
		Self::new(name, "", kind)
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}
}

impl Feature {
	/// The features which are active because of this one:
	/// bundled features, and the features picked by a choice or subclass.
	/// Unpicked choice options are not children.
	pub fn children(&self) -> &[Feature] {
		match &self.kind {
			FeatureKind::Multiple(data) => &data.features,
			FeatureKind::Choice(data) => &data.selected,
			FeatureKind::Subclass(data) => &data.selected,
			FeatureKind::Text
			| FeatureKind::Ability(_)
			| FeatureKind::Bonus(_)
			| FeatureKind::ClassAbility(_)
			| FeatureKind::DamageModifier(_)
			| FeatureKind::Kit(_)
			| FeatureKind::Language(_)
			| FeatureKind::Size(_)
			| FeatureKind::Skill(_) => &[],
		}
	}

	pub fn children_mut(&mut self) -> &mut [Feature] {
		match &mut self.kind {
			FeatureKind::Multiple(data) => &mut data.features,
			FeatureKind::Choice(data) => &mut data.selected,
			FeatureKind::Subclass(data) => &mut data.selected,
			FeatureKind::Text
			| FeatureKind::Ability(_)
			| FeatureKind::Bonus(_)
			| FeatureKind::ClassAbility(_)
			| FeatureKind::DamageModifier(_)
			| FeatureKind::Kit(_)
			| FeatureKind::Language(_)
			| FeatureKind::Size(_)
			| FeatureKind::Skill(_) => &mut [],
		}
	}

	/// Depth-first iteration over this feature and every active feature beneath it.
	pub fn iter(&self) -> FeatureIter<'_> {
		FeatureIter { stack: vec![self] }
	}

	/// Visits this feature and every active feature beneath it, parents before children.
	pub fn visit_mut<F>(&mut self, visit: &mut F)
	where
		F: FnMut(&mut Feature),
	{
		visit(self);
		for child in self.children_mut() {
			child.visit_mut(visit);
		}
	}

	pub fn find(&self, id: &str) -> Option<&Feature> {
		self.iter().find(|feature| feature.id == id)
	}

	pub fn find_mut(&mut self, id: &str) -> Option<&mut Feature> {
		if self.id == id {
			return Some(self);
		}
		for child in self.children_mut() {
			if let Some(found) = child.find_mut(id) {
				return Some(found);
			}
		}
		None
	}

	/// Returns `(selected, count)` for selection-bearing features.
	pub fn selection_progress(&self) -> Option<(usize, usize)> {
		fn progress<S: Selection>(data: &S) -> Option<(usize, usize)> {
			Some((data.selected().len(), data.count()))
		}
		match &self.kind {
			FeatureKind::Choice(data) => progress(data),
			FeatureKind::ClassAbility(data) => progress(data),
			FeatureKind::Kit(data) => progress(data),
			FeatureKind::Language(data) => progress(data),
			FeatureKind::Skill(data) => progress(data),
			FeatureKind::Subclass(data) => progress(data),
			FeatureKind::Text
			| FeatureKind::Ability(_)
			| FeatureKind::Bonus(_)
			| FeatureKind::DamageModifier(_)
			| FeatureKind::Multiple(_)
			| FeatureKind::Size(_) => None,
		}
	}

	pub fn is_unresolved(&self) -> bool {
		matches!(self.selection_progress(), Some((selected, count)) if selected < count)
	}

	/// Drops selections beyond the declared count, returning how many were removed.
	pub fn truncate_selection(&mut self) -> usize {
		match &mut self.kind {
			FeatureKind::Choice(data) => data.truncate_to_count(),
			FeatureKind::ClassAbility(data) => data.truncate_to_count(),
			FeatureKind::Kit(data) => data.truncate_to_count(),
			FeatureKind::Language(data) => data.truncate_to_count(),
			FeatureKind::Skill(data) => data.truncate_to_count(),
			FeatureKind::Subclass(data) => data.truncate_to_count(),
			FeatureKind::Text
			| FeatureKind::Ability(_)
			| FeatureKind::Bonus(_)
			| FeatureKind::DamageModifier(_)
			| FeatureKind::Multiple(_)
			| FeatureKind::Size(_) => 0,
		}
	}

	/// Picks the option with the given key if it isn't picked, otherwise unpicks it.
	/// Kits and subclasses can only be unpicked, their candidates live outside the feature.
	pub fn toggle_option(&mut self, key: &str) -> Result<(), SelectionError> {
		match &mut self.kind {
			FeatureKind::Choice(data) => {
				if data.deselect(key).is_some() {
					return Ok(());
				}
				let option = data.options.iter().find(|option| option.feature.id == key);
				let Some(feature) = option.map(|option| option.feature.clone()) else {
					return Ok(());
				};
				data.select(feature).map(|_| ())
			}
			FeatureKind::ClassAbility(data) => data.toggle(key.to_owned()),
			FeatureKind::Language(data) => data.toggle(key.to_owned()),
			FeatureKind::Skill(data) => data.toggle(key.to_owned()),
			FeatureKind::Kit(data) => {
				data.deselect(key);
				Ok(())
			}
			FeatureKind::Subclass(data) => {
				data.deselect(key);
				Ok(())
			}
			FeatureKind::Text
			| FeatureKind::Ability(_)
			| FeatureKind::Bonus(_)
			| FeatureKind::DamageModifier(_)
			| FeatureKind::Multiple(_)
			| FeatureKind::Size(_) => Ok(()),
		}
	}
}

pub struct FeatureIter<'a> {
	stack: Vec<&'a Feature>,
}

impl<'a> Iterator for FeatureIter<'a> {
	type Item = &'a Feature;

	fn next(&mut self) -> Option<Self::Item> {
		let feature = self.stack.pop()?;
		// pushed in reverse so that children are visited in declaration order
		self.stack.extend(feature.children().iter().rev());
		Some(feature)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use trim_margin::MarginTrimmable;

	fn bundle() -> Feature {
		let mut choice = Feature::choice(
			"Ancestry Trait",
			vec![
				ChoiceOption::new(Feature::text("Grounded", "You can't be knocked prone."), 1),
				ChoiceOption::new(Feature::bonus("Spark Off Your Skin", FeatureField::Stamina, 6, 0), 2),
			],
			1,
		);
		if let FeatureKind::Choice(data) = &mut choice.kind {
			let option = data.options[0].feature.clone();
			assert_eq!(data.select(option), Ok(true));
		}
		Feature::multiple(
			"Dwarf",
			vec![
				Feature::size("Size", Size::default()),
				choice,
				Feature::language("Languages", vec!["Rhyvian".into(), "Zaliac".into()], 1),
			],
		)
	}

	#[test]
	fn constructor_sets_choice_flag() {
		assert!(!Feature::text("Lore", "").choice);
		assert!(!Feature::bonus("Tough", FeatureField::Stamina, 3, 1).choice);
		assert!(Feature::language("Tongues", vec![], 1).choice);
		assert!(Feature::subclass("Order", "Doctrine", 1).choice);
		assert!(Feature::class_ability("Signature", 0, 1).choice);
	}

	#[test]
	fn generated_ids_are_unique() {
		let a = Feature::text("A", "");
		let b = Feature::text("A", "");
		assert_ne!(a.id, b.id);
	}

	#[test]
	fn iter_is_depth_first() {
		let feature = bundle();
		let names = feature.iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
		assert_eq!(names, vec!["Dwarf", "Size", "Ancestry Trait", "Grounded", "Languages"]);
	}

	#[test]
	fn unpicked_options_are_not_visited() {
		let feature = bundle();
		assert!(feature.iter().all(|f| f.name != "Spark Off Your Skin"));
	}

	#[test]
	fn find_mut_reaches_nested() {
		let mut feature = bundle();
		let id = feature.iter().find(|f| f.name == "Languages").map(|f| f.id.clone()).unwrap();
		let found = feature.find_mut(&id).unwrap();
		if let FeatureKind::Language(data) = &mut found.kind {
			data.select("Zaliac".into()).unwrap();
		}
		let found = feature.find(&id).unwrap();
		assert_eq!(found.selection_progress(), Some((1, 1)));
		assert!(!found.is_unresolved());
	}

	#[test]
	fn visit_mut_visits_all() {
		let mut feature = bundle();
		let mut count = 0;
		feature.visit_mut(&mut |_| count += 1);
		assert_eq!(count, 5);
	}

	#[test]
	fn truncate_selection() {
		let mut feature = Feature::skill("Skills", vec![], vec![SkillList::Lore], 1);
		if let FeatureKind::Skill(data) = &mut feature.kind {
			data.selected = vec!["History".into(), "Magic".into(), "Nature".into()];
		}
		assert_eq!(feature.truncate_selection(), 2);
		assert_eq!(feature.selection_progress(), Some((1, 1)));
	}

	#[test]
	fn toggle_option_respects_count() {
		let mut feature = bundle();
		let FeatureKind::Multiple(FeatureMultipleData { features }) = &mut feature.kind else {
			unreachable!()
		};
		let choice = &mut features[1];
		let FeatureKind::Choice(data) = &choice.kind else {
			panic!("expected a choice");
		};
		let first = data.options[0].feature.id.clone();
		let second = data.options[1].feature.id.clone();
		let picked = data.selected.first().map(|f| f.id.clone());

		if let Some(picked) = picked {
			choice.toggle_option(&picked).unwrap();
		}
		choice.toggle_option(&first).unwrap();
		assert_eq!(choice.toggle_option(&second), Err(SelectionError::Full { count: 1 }));
		choice.toggle_option(&first).unwrap();
		choice.toggle_option(&second).unwrap();
		assert_eq!(choice.selection_progress(), Some((1, 1)));
		assert!(choice.find(&second).is_some());
	}

	#[test]
	fn deserialize_language() -> anyhow::Result<()> {
		let json = r#"
			|{
			|	"id": "lang-1",
			|	"name": "Languages",
			|	"description": "You know one more language.",
			|	"type": "Language",
			|	"choice": true,
			|	"data": {
			|		"options": ["Caelian", "Khelt"],
			|		"count": 1,
			|		"selected": ["Khelt"]
			|	}
			|}
		"#
		.trim_margin()
		.unwrap();
		let feature: Feature = serde_json::from_str(&json)?;
		let expected = Feature {
			id: "lang-1".into(),
			name: "Languages".into(),
			description: "You know one more language.".into(),
			choice: true,
			kind: FeatureKind::Language(FeatureLanguageData {
				options: vec!["Caelian".into(), "Khelt".into()],
				count: 1,
				selected: vec!["Khelt".into()],
			}),
		};
		assert_eq!(feature, expected);
		Ok(())
	}

	#[test]
	fn deserialize_class_ability() -> anyhow::Result<()> {
		let json = r#"
			|{
			|	"id": "ca-1",
			|	"name": "Heroic Ability",
			|	"description": "",
			|	"type": "Class Ability",
			|	"choice": true,
			|	"data": { "cost": 3, "count": 1, "selectedIDs": ["ability-a"] }
			|}
		"#
		.trim_margin()
		.unwrap();
		let feature: Feature = serde_json::from_str(&json)?;
		let FeatureKind::ClassAbility(data) = &feature.kind else {
			panic!("expected class ability, found {}", feature.kind.type_name());
		};
		assert_eq!(data.cost, 3);
		assert_eq!(data.selected_ids, vec!["ability-a".to_owned()]);
		Ok(())
	}

	#[test]
	fn deserialize_text_without_data() -> anyhow::Result<()> {
		let json = r#"{"id":"t","name":"Flavor","description":"Words.","type":"Text","choice":false}"#;
		let feature: Feature = serde_json::from_str(json)?;
		assert_eq!(feature.kind, FeatureKind::Text);
		Ok(())
	}

	#[test]
	fn serialize_uses_type_and_data() -> anyhow::Result<()> {
		let feature = Feature::bonus("Tough", FeatureField::Stamina, 3, 1);
		let value = serde_json::to_value(&feature)?;
		assert_eq!(value["type"], "Bonus");
		assert_eq!(value["data"]["field"], "Stamina");
		assert_eq!(value["data"]["valuePerLevel"], 1);
		let parsed: Feature = serde_json::from_value(value)?;
		assert_eq!(parsed, feature);
		Ok(())
	}

	#[test]
	fn mismatched_payload_is_rejected() {
		let json = r#"{"id":"x","name":"Bad","description":"","type":"Size","choice":false,"data":{"count":1}}"#;
		assert!(serde_json::from_str::<Feature>(json).is_err());
	}
}
