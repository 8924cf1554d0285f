use crate::system::data::{
	Ability, Ancestry, Career, Characteristic, Complication, Culture, Hero, HeroClass, Kit,
};

/// The content of the overlay slot. Opening one replaces whatever was open.
#[derive(Clone, PartialEq, Debug)]
pub enum Drawer {
	About,
	ImportHero,
	Ancestry(Ancestry),
	Culture(Culture),
	Career(Career),
	Class(HeroClass),
	Complication(Complication),
	Kit(Kit),
	Characteristic(Characteristic, Hero),
	Ability(Ability, Hero),
	HeroState(Hero),
}

impl Drawer {
	pub fn title(&self) -> String {
		match self {
			Self::About => "About".into(),
			Self::ImportHero => "Import Hero".into(),
			Self::Ancestry(ancestry) => ancestry.name.clone(),
			Self::Culture(culture) => culture.name.clone(),
			Self::Career(career) => career.name.clone(),
			Self::Class(class) => class.name.clone(),
			Self::Complication(complication) => complication.name.clone(),
			Self::Kit(kit) => kit.name.clone(),
			Self::Characteristic(characteristic, _) => characteristic.display_name().into(),
			Self::Ability(ability, _) => ability.name.clone(),
			Self::HeroState(hero) => hero.display_name().into(),
		}
	}

	/// The hero this drawer displays, if it is tied to one.
	pub fn hero(&self) -> Option<&Hero> {
		match self {
			Self::Characteristic(_, hero) | Self::Ability(_, hero) | Self::HeroState(hero) => Some(hero),
			_ => None,
		}
	}
}
