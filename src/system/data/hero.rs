use super::{
	Ancestry, CampaignSetting, Career, Characteristic, Complication, Culture, Feature, FeatureField,
	FeatureKind, HeroClass, Kit,
};
use enumset::EnumSetType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A hero's character sheet: the rule data chosen for it and its current play state.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
	pub id: String,
	pub name: String,
	#[serde(rename = "settingIDs")]
	pub setting_ids: Vec<String>,
	pub ancestry: Option<Ancestry>,
	pub culture: Option<Culture>,
	pub career: Option<Career>,
	pub class: Option<HeroClass>,
	pub complication: Option<Complication>,
	pub state: HeroState,
}

/// The parts of a hero which change during play.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroState {
	pub stamina_damage: i32,
	pub stamina_temp: i32,
	pub recoveries_used: i32,
	pub surges: i32,
	pub victories: i32,
	pub xp: i32,
	pub heroic_resource: i32,
	pub hero_tokens: i32,
	pub renown: i32,
	pub wealth: i32,
	pub hidden: bool,
	pub notes: String,
}

impl Default for Hero {
	fn default() -> Self {
		Self {
			id: String::new(),
			name: String::new(),
			setting_ids: Vec::new(),
			ancestry: None,
			culture: None,
			career: None,
			class: None,
			complication: None,
			state: HeroState::default(),
		}
	}
}

/// The numeric parts of [`HeroState`] which are adjusted during play.
#[derive(Debug, EnumSetType)]
pub enum Counter {
	StaminaDamage,
	StaminaTemp,
	RecoveriesUsed,
	HeroicResource,
	Surges,
	Victories,
	Experience,
	HeroTokens,
	Renown,
	Wealth,
}

impl Counter {
	pub fn display_name(&self) -> &'static str {
		match self {
			Self::StaminaDamage => "Stamina Damage",
			Self::StaminaTemp => "Temporary Stamina",
			Self::RecoveriesUsed => "Recoveries Used",
			Self::HeroicResource => "Heroic Resource",
			Self::Surges => "Surges",
			Self::Victories => "Victories",
			Self::Experience => "Experience",
			Self::HeroTokens => "Hero Tokens",
			Self::Renown => "Renown",
			Self::Wealth => "Wealth",
		}
	}
}

impl HeroState {
	pub fn counter(&self, counter: Counter) -> i32 {
		match counter {
			Counter::StaminaDamage => self.stamina_damage,
			Counter::StaminaTemp => self.stamina_temp,
			Counter::RecoveriesUsed => self.recoveries_used,
			Counter::HeroicResource => self.heroic_resource,
			Counter::Surges => self.surges,
			Counter::Victories => self.victories,
			Counter::Experience => self.xp,
			Counter::HeroTokens => self.hero_tokens,
			Counter::Renown => self.renown,
			Counter::Wealth => self.wealth,
		}
	}

	fn counter_mut(&mut self, counter: Counter) -> &mut i32 {
		match counter {
			Counter::StaminaDamage => &mut self.stamina_damage,
			Counter::StaminaTemp => &mut self.stamina_temp,
			Counter::RecoveriesUsed => &mut self.recoveries_used,
			Counter::HeroicResource => &mut self.heroic_resource,
			Counter::Surges => &mut self.surges,
			Counter::Victories => &mut self.victories,
			Counter::Experience => &mut self.xp,
			Counter::HeroTokens => &mut self.hero_tokens,
			Counter::Renown => &mut self.renown,
			Counter::Wealth => &mut self.wealth,
		}
	}

	/// Adds `delta` to a counter, never going below zero. Returns the new value.
	pub fn adjust(&mut self, counter: Counter, delta: i32) -> i32 {
		let value = self.counter_mut(counter);
		*value = value.saturating_add(delta).max(0);
		*value
	}
}

/// What [`Hero::normalize`] had to repair.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NormalizeReport {
	pub reassigned_ids: usize,
	pub truncated_selections: usize,
}

impl NormalizeReport {
	pub fn is_clean(&self) -> bool {
		self.reassigned_ids == 0 && self.truncated_selections == 0
	}
}

impl Hero {
	/// Creates an empty hero in the given campaign setting.
	pub fn new(setting_id: impl Into<String>) -> Self {
		Self {
			id: crate::utility::guid(),
			setting_ids: vec![setting_id.into()],
			..Default::default()
		}
	}

	pub fn display_name(&self) -> &str {
		match self.name.trim() {
			"" => "Unnamed Hero",
			name => name,
		}
	}

	pub fn level(&self) -> u32 {
		self.class.as_ref().map(|class| class.level.max(1)).unwrap_or(1)
	}

	pub fn characteristic(&self, characteristic: Characteristic) -> i32 {
		self.class
			.as_ref()
			.map(|class| class.characteristics[characteristic])
			.unwrap_or_default()
	}

	/// Damage of a free strike: 2 plus the better of Might and Agility.
	pub fn free_strike_damage(&self) -> i32 {
		let best = self
			.characteristic(Characteristic::Might)
			.max(self.characteristic(Characteristic::Agility));
		best.saturating_add(2)
	}

	/// The top-level features granted by each rule source, in sheet order.
	pub fn root_features(&self) -> Vec<&Feature> {
		let mut features = Vec::new();
		if let Some(ancestry) = &self.ancestry {
			features.extend(ancestry.features.iter());
		}
		if let Some(culture) = &self.culture {
			features.extend(culture.aspects());
		}
		if let Some(career) = &self.career {
			features.extend(career.features.iter());
		}
		if let Some(class) = &self.class {
			features.extend(class.active_features());
		}
		if let Some(complication) = &self.complication {
			features.extend(complication.features.iter());
		}
		features
	}

	pub fn root_features_mut(&mut self) -> Vec<&mut Feature> {
		let mut features = Vec::new();
		if let Some(ancestry) = &mut self.ancestry {
			features.extend(ancestry.features.iter_mut());
		}
		if let Some(culture) = &mut self.culture {
			features.extend(culture.aspects_mut());
		}
		if let Some(career) = &mut self.career {
			features.extend(career.features.iter_mut());
		}
		if let Some(class) = &mut self.class {
			features.extend(class.active_features_mut());
		}
		if let Some(complication) = &mut self.complication {
			features.extend(complication.features.iter_mut());
		}
		features
	}

	/// Every active feature on the hero, including nested ones.
	pub fn features(&self) -> Vec<&Feature> {
		self.root_features().into_iter().flat_map(Feature::iter).collect()
	}

	pub fn feature_mut(&mut self, id: &str) -> Option<&mut Feature> {
		self.root_features_mut()
			.into_iter()
			.find_map(|feature| feature.find_mut(id))
	}

	pub fn unresolved_choices(&self) -> Vec<&Feature> {
		self.features().into_iter().filter(|feature| feature.is_unresolved()).collect()
	}

	/// Ids which occur on more than one owned feature in the hero's feature tree.
	/// Picks of a choice or subclass share their option's id and are not counted.
	pub fn duplicate_feature_ids(&self) -> Vec<String> {
		let mut ids = Vec::new();
		for root in self.root_features() {
			owned_ids(root, &mut ids);
		}
		let mut seen = HashSet::new();
		let mut duplicates = Vec::new();
		for id in ids {
			if !seen.insert(id) && !duplicates.iter().any(|dup: &String| dup.as_str() == id) {
				duplicates.push(id.to_owned());
			}
		}
		duplicates
	}

	/// The kits chosen through the hero's kit features.
	pub fn kits(&self) -> Vec<&Kit> {
		self.features()
			.into_iter()
			.filter_map(|feature| match &feature.kind {
				FeatureKind::Kit(data) => Some(data.selected.iter()),
				_ => None,
			})
			.flatten()
			.collect()
	}

	/// The languages known from the hero's culture and language features.
	pub fn languages(&self) -> Vec<String> {
		let mut languages = self
			.culture
			.as_ref()
			.map(|culture| culture.languages.clone())
			.unwrap_or_default();
		for feature in self.features() {
			if let FeatureKind::Language(data) = &feature.kind {
				languages.extend(data.selected.iter().cloned());
			}
		}
		languages
	}

	/// The total bonus to a field from the hero's bonus features and kits.
	pub fn field_bonus(&self, field: FeatureField) -> i32 {
		let level = self.level();
		let from_features: i32 = self
			.features()
			.into_iter()
			.filter_map(|feature| match &feature.kind {
				FeatureKind::Bonus(data) if data.field == field => Some(data.value_at(level)),
				_ => None,
			})
			.fold(0, i32::saturating_add);
		let from_kits: i32 = self
			.kits()
			.into_iter()
			.map(|kit| match field {
				FeatureField::Stamina => kit.stamina,
				FeatureField::Speed => kit.speed,
				FeatureField::Stability => kit.stability,
				FeatureField::Disengage => kit.disengage,
				_ => 0,
			})
			.fold(0, i32::saturating_add);
		from_features.saturating_add(from_kits)
	}

	/// Brings a hero document (from storage or an import) up to date:
	/// fills in a campaign setting, gives duplicated feature ids fresh ones,
	/// and drops selections beyond a feature's count.
	pub fn normalize(&mut self) -> NormalizeReport {
		let mut report = NormalizeReport::default();
		if self.setting_ids.is_empty() {
			self.setting_ids.push(CampaignSetting::orden().id);
		}

		let mut seen = HashSet::new();
		for root in self.root_features_mut() {
			root.visit_mut(&mut |feature: &mut Feature| {
				report.truncated_selections += feature.truncate_selection();
			});
			visit_owned_mut(root, &mut |feature: &mut Feature| {
				if !seen.insert(feature.id.clone()) {
					feature.id = crate::utility::guid();
					seen.insert(feature.id.clone());
					report.reassigned_ids += 1;
				}
			});
		}

		if !report.is_clean() {
			log::warn!(
				target: "hero",
				"Normalized {:?}: {} feature id(s) reassigned, {} selection(s) dropped",
				self.display_name(),
				report.reassigned_ids,
				report.truncated_selections
			);
		}
		report
	}
}

/// Visits a feature and the features beneath it which the hero owns outright.
/// The picks of a choice or subclass are copies of an option and keep its id,
/// so they are not visited.
fn visit_owned_mut<F>(feature: &mut Feature, visit: &mut F)
where
	F: FnMut(&mut Feature),
{
	visit(feature);
	if matches!(feature.kind, FeatureKind::Choice(_) | FeatureKind::Subclass(_)) {
		return;
	}
	for child in feature.children_mut() {
		visit_owned_mut(child, visit);
	}
}

fn owned_ids<'a>(feature: &'a Feature, ids: &mut Vec<&'a str>) {
	ids.push(feature.id.as_str());
	if matches!(feature.kind, FeatureKind::Choice(_) | FeatureKind::Subclass(_)) {
		return;
	}
	for child in feature.children() {
		owned_ids(child, ids);
	}
}

/// Orders heroes by name, ignoring case. Heroes with the same name keep their relative order.
pub fn sort_by_name(heroes: &mut [Hero]) {
	heroes.sort_by_cached_key(|hero| hero.name.to_lowercase());
}
