use super::{Ability, Characteristic, Feature};
use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroClass {
	pub id: String,
	pub name: String,
	pub description: String,
	pub heroic_resource: String,
	pub subclass_name: String,
	pub subclass_count: usize,
	pub primary_characteristics: Vec<Characteristic>,
	pub characteristics: EnumMap<Characteristic, i32>,
	pub features_by_level: Vec<LevelFeatures>,
	pub abilities: Vec<Ability>,
	pub subclasses: Vec<SubClass>,
	pub level: u32,
}

impl Default for HeroClass {
	fn default() -> Self {
		Self {
			id: String::new(),
			name: String::new(),
			description: String::new(),
			heroic_resource: String::new(),
			subclass_name: String::new(),
			subclass_count: 0,
			primary_characteristics: Vec::new(),
			characteristics: EnumMap::default(),
			features_by_level: Vec::new(),
			abilities: Vec::new(),
			subclasses: Vec::new(),
			level: 1,
		}
	}
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelFeatures {
	pub level: u32,
	pub features: Vec<Feature>,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubClass {
	pub id: String,
	pub name: String,
	pub description: String,
	pub features_by_level: Vec<LevelFeatures>,
	pub selected: bool,
}

impl HeroClass {
	/// The features granted by the class and its selected subclasses at the class's current level.
	pub fn active_features(&self) -> impl Iterator<Item = &Feature> + '_ {
		let level = self.level;
		let subclass_levels = self
			.subclasses
			.iter()
			.filter(|subclass| subclass.selected)
			.flat_map(|subclass| subclass.features_by_level.iter());
		self.features_by_level
			.iter()
			.chain(subclass_levels)
			.filter(move |group| group.level <= level)
			.flat_map(|group| group.features.iter())
	}

	pub fn active_features_mut(&mut self) -> impl Iterator<Item = &mut Feature> + '_ {
		let level = self.level;
		let subclass_levels = self
			.subclasses
			.iter_mut()
			.filter(|subclass| subclass.selected)
			.flat_map(|subclass| subclass.features_by_level.iter_mut());
		self.features_by_level
			.iter_mut()
			.chain(subclass_levels)
			.filter(move |group| group.level <= level)
			.flat_map(|group| group.features.iter_mut())
	}

	pub fn selected_subclasses(&self) -> impl Iterator<Item = &SubClass> + '_ {
		self.subclasses.iter().filter(|subclass| subclass.selected)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn active_features_respect_level_and_subclass() {
		let class = HeroClass {
			level: 2,
			features_by_level: vec![
				LevelFeatures {
					level: 1,
					features: vec![Feature::text("Kit", "")],
				},
				LevelFeatures {
					level: 3,
					features: vec![Feature::text("Later", "")],
				},
			],
			subclasses: vec![
				SubClass {
					name: "Chosen".into(),
					selected: true,
					features_by_level: vec![LevelFeatures {
						level: 2,
						features: vec![Feature::text("Chosen Trait", "")],
					}],
					..Default::default()
				},
				SubClass {
					name: "Ignored".into(),
					features_by_level: vec![LevelFeatures {
						level: 1,
						features: vec![Feature::text("Ignored Trait", "")],
					}],
					..Default::default()
				},
			],
			..Default::default()
		};
		let names = class.active_features().map(|f| f.name.as_str()).collect::<Vec<_>>();
		assert_eq!(names, vec!["Kit", "Chosen Trait"]);
	}
}
